//! `SpeechRecognizer` interface.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::interfaces::duration_from_millis;
use crate::protocol::kind::MessageKind;
use crate::protocol::lenient;
use crate::protocol::typed::{Payload, Variant};

/// Audio format sent with every `Recognize` event.
pub const DEFAULT_FORMAT: &str = "AUDIO_L16_RATE_16000_CHANNELS_1";
/// ASR profile sent with every `Recognize` event.
pub const DEFAULT_PROFILE: &str = "CLOSE_TALK";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectSpeechPayload {
    #[serde(default, deserialize_with = "lenient::field")]
    pub timeout_in_milliseconds: f64,
}

impl Payload for ExpectSpeechPayload {
    const KIND: MessageKind = MessageKind::ExpectSpeech;
}

/// The `ExpectSpeech` directive.
pub type ExpectSpeech = Variant<ExpectSpeechPayload>;

impl ExpectSpeech {
    /// How long to listen before reporting `ExpectSpeechTimedOut`.
    pub fn timeout(&self) -> Duration {
        duration_from_millis(self.payload.timeout_in_milliseconds)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectSpeechTimedOutPayload {}

impl Payload for ExpectSpeechTimedOutPayload {
    const KIND: MessageKind = MessageKind::ExpectSpeechTimedOut;
}

/// The `ExpectSpeechTimedOut` event.
pub type ExpectSpeechTimedOut = Variant<ExpectSpeechTimedOutPayload>;

impl ExpectSpeechTimedOut {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self::new_event(message_id, None, ExpectSpeechTimedOutPayload {})
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizePayload {
    #[serde(default, deserialize_with = "lenient::field")]
    pub profile: String,
    #[serde(default, deserialize_with = "lenient::field")]
    pub format: String,
}

impl Payload for RecognizePayload {
    const KIND: MessageKind = MessageKind::Recognize;
}

/// The `Recognize` event.
pub type Recognize = Variant<RecognizePayload>;

impl Recognize {
    /// Build a `Recognize` event for 16 kHz mono PCM from a close-talk mic.
    pub fn new(message_id: impl Into<String>, dialog_request_id: &str) -> Self {
        Self::new_event(
            message_id,
            Some(dialog_request_id),
            RecognizePayload {
                profile: DEFAULT_PROFILE.into(),
                format: DEFAULT_FORMAT.into(),
            },
        )
    }
}
