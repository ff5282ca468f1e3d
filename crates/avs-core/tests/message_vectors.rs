//! Envelope parsing and construction tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use avs_core::protocol::message::{keys, Message};

#[test]
fn parse_envelope_with_payload() {
    let s = r#"{
        "header": {
            "namespace": "SpeechSynthesizer",
            "name": "Speak",
            "messageId": "m-1",
            "dialogRequestId": "d-1"
        },
        "payload": {"format": "AUDIO_MPEG", "url": "cid:abc"}
    }"#;
    let msg = Message::from_json(s).unwrap();
    assert_eq!(msg.namespace(), "SpeechSynthesizer");
    assert_eq!(msg.name(), "Speak");
    assert_eq!(msg.message_id(), "m-1");
    assert_eq!(msg.dialog_request_id(), "d-1");
    assert!(msg.raw_payload().unwrap().contains("\"cid:abc\""));
    assert!(msg.is_well_formed());
}

#[test]
fn parse_envelope_without_payload() {
    let s = r#"{"header": {"namespace": "AudioPlayer", "name": "Stop"}}"#;
    let msg = Message::from_json(s).unwrap();
    assert!(msg.payload.is_none());

    let s = r#"{"header": {"namespace": "AudioPlayer", "name": "Stop"}, "payload": null}"#;
    let msg = Message::from_json(s).unwrap();
    assert!(msg.payload.is_none());
}

#[test]
fn unknown_top_level_keys_are_ignored() {
    let s = r#"{"header": {"namespace": "System", "name": "Exception"}, "extra": 1}"#;
    let msg = Message::from_json(s).unwrap();
    assert_eq!(msg.discriminator(), "System.Exception");
}

#[test]
fn discriminator_with_empty_segments() {
    assert_eq!(Message::default().discriminator(), ".");
    assert_eq!(Message::new_context("", "Play").discriminator(), ".Play");
    assert_eq!(Message::new_context("AudioPlayer", "").discriminator(), "AudioPlayer.");
    assert_eq!(Message::new_context("AudioPlayer", "Play").discriminator(), "AudioPlayer.Play");
    assert!(!Message::new_context("AudioPlayer", "").is_well_formed());
}

#[test]
fn display_matches_discriminator() {
    let msg = Message::new_context("AudioPlayer", "PlaybackState");
    assert_eq!(msg.to_string(), msg.discriminator());
}

#[test]
fn context_has_only_namespace_and_name() {
    let msg = Message::new_context("AudioPlayer", "PlaybackState");
    assert_eq!(msg.header.len(), 2);
    assert_eq!(msg.namespace(), "AudioPlayer");
    assert_eq!(msg.name(), "PlaybackState");
    assert!(msg.payload.is_none());
}

#[test]
fn event_without_dialog_request_id_omits_key() {
    let msg = Message::new_event("System", "SynchronizeState", "m1", Some(""));
    assert_eq!(msg.header_value(keys::NAMESPACE), "System");
    assert_eq!(msg.header_value(keys::NAME), "SynchronizeState");
    assert_eq!(msg.header_value(keys::MESSAGE_ID), "m1");
    assert!(!msg.header.contains_key(keys::DIALOG_REQUEST_ID));

    let msg = Message::new_event("System", "SynchronizeState", "m1", None);
    assert!(!msg.header.contains_key(keys::DIALOG_REQUEST_ID));
}

#[test]
fn event_with_dialog_request_id() {
    let msg = Message::new_event("SpeechRecognizer", "Recognize", "m2", Some("d9"));
    assert_eq!(msg.header.get(keys::DIALOG_REQUEST_ID).map(String::as_str), Some("d9"));
    assert_eq!(msg.message_id(), "m2");
}

#[test]
fn encoded_message_parses_back() {
    let msg = Message::new_event("System", "SynchronizeState", "m1", None);
    let bytes = msg.to_bytes().unwrap();
    let text = std::str::from_utf8(&bytes).unwrap();
    assert!(!text.contains("payload"));
    assert_eq!(Message::from_slice(&bytes).unwrap(), msg);
}

#[test]
fn clones_do_not_share_headers() {
    let a = Message::new_event("System", "SynchronizeState", "m1", None);
    let mut b = a.clone();
    b.header.insert(keys::DIALOG_REQUEST_ID.into(), "d1".into());
    assert_eq!(a.dialog_request_id(), "");
    assert_eq!(b.dialog_request_id(), "d1");
}

#[test]
fn generated_message_ids_are_unique() {
    let a = avs_core::new_message_id();
    let b = avs_core::new_message_id();
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);
}
