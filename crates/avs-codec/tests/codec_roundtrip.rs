#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Cursor;
use std::time::Duration;

use avs_codec::config::CodecSection;
use avs_codec::inspect::{inspect_lines, summarize, InspectStats};
use avs_codec::Codec;
use avs_core::interfaces::audio_player::{PlaybackState, PlayerActivity};
use avs_core::interfaces::speech_recognizer::Recognize;
use avs_core::{MessageKind, TypedMessage};

const SPEAK: &str = concat!(
    r#"{"header":{"namespace":"SpeechSynthesizer","name":"Speak","messageId":"m-1"},"#,
    r#""payload":{"format":"AUDIO_MPEG","url":"cid:abc123"}}"#
);
const UNKNOWN: &str = concat!(
    r#"{"header":{"namespace":"Alerts","name":"SetAlert","messageId":"m-2"},"#,
    r#""payload":{"token":"t"}}"#
);
const NO_NAME: &str = r#"{"header":{"namespace":"System"}}"#;

fn codec(max_message_bytes: usize, require_header: bool) -> Codec {
    Codec::new(&CodecSection {
        max_message_bytes,
        require_header,
    })
}

#[test]
fn decode_typed_known_and_unknown() {
    let c = Codec::default();
    assert_eq!(c.decode_typed(SPEAK.as_bytes()).unwrap().kind(), Some(MessageKind::Speak));
    assert_eq!(c.decode_typed(UNKNOWN.as_bytes()).unwrap().kind(), None);
}

#[test]
fn oversized_input_rejected_before_parsing() {
    let c = codec(256, false);
    let header = r#""header":{"namespace":"System","name":"Exception"}"#;
    let big = format!(r#"{{{header},"payload":{{"description":"{}"}}}}"#, "x".repeat(512));
    let err = c.decode(big.as_bytes()).expect_err("must fail");
    assert_eq!(err.code().as_str(), "PAYLOAD_TOO_LARGE");
}

#[test]
fn oversized_output_rejected() {
    let c = codec(256, false);
    let state = PlaybackState::new("t".repeat(400), Duration::ZERO, PlayerActivity::Idle);
    let err = c.encode(&TypedMessage::PlaybackState(state)).expect_err("must fail");
    assert_eq!(err.code().as_str(), "PAYLOAD_TOO_LARGE");
}

#[test]
fn require_header_rejects_missing_name() {
    let err = codec(4096, true).decode(NO_NAME.as_bytes()).expect_err("must fail");
    assert_eq!(err.code().as_str(), "MISSING_HEADER");

    let msg = codec(4096, false).decode(NO_NAME.as_bytes()).unwrap();
    assert_eq!(msg.discriminator(), "System.");
}

#[test]
fn malformed_json_is_decode_error() {
    let err = Codec::default().decode(b"{\"header\":").expect_err("must fail");
    assert_eq!(err.code().as_str(), "DECODE_ERROR");
}

#[test]
fn encoded_event_decodes_to_same_variant() {
    let c = Codec::default();
    let bytes = c.encode(&TypedMessage::Recognize(Recognize::new("m-3", "d-3"))).unwrap();
    match c.decode_typed(&bytes).unwrap() {
        TypedMessage::Recognize(rec) => {
            assert_eq!(rec.message().dialog_request_id(), "d-3");
            assert_eq!(rec.payload.format, "AUDIO_L16_RATE_16000_CHANNELS_1");
        }
        other => panic!("expected Recognize, got {other:?}"),
    }
}

#[test]
fn summarize_speak() {
    let msg = Codec::default().decode_typed(SPEAK.as_bytes()).unwrap();
    assert_eq!(
        summarize(&msg),
        r#"SpeechSynthesizer.Speak typed format="AUDIO_MPEG" content_id="abc123""#
    );
}

#[test]
fn summarize_generic() {
    let msg = Codec::default().decode_typed(UNKNOWN.as_bytes()).unwrap();
    assert_eq!(summarize(&msg), "Alerts.SetAlert generic");
}

#[test]
fn inspect_counts_lines() {
    let input = format!("{SPEAK}\n\n{UNKNOWN}\nnot json\n");
    let mut out = Vec::new();
    let stats = inspect_lines(&Codec::default(), Cursor::new(input), &mut out).unwrap();

    assert_eq!(
        stats,
        InspectStats {
            typed: 1,
            generic: 1,
            rejected: 1
        }
    );

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("SpeechSynthesizer.Speak typed"));
    assert_eq!(lines[1], "Alerts.SetAlert generic");
    assert!(lines[2].starts_with("line 4: DECODE_ERROR"));
}
