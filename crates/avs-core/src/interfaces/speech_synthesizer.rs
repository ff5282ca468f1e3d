//! `SpeechSynthesizer` interface.

use serde::{Deserialize, Serialize};

use crate::interfaces::content_id;
use crate::protocol::kind::MessageKind;
use crate::protocol::lenient;
use crate::protocol::typed::{Payload, Variant};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakPayload {
    #[serde(default, deserialize_with = "lenient::field")]
    pub format: String,
    /// Usually a `cid:` reference to an audio part of the same response.
    #[serde(default, deserialize_with = "lenient::field")]
    pub url: String,
}

impl Payload for SpeakPayload {
    const KIND: MessageKind = MessageKind::Speak;
}

/// The `Speak` directive.
pub type Speak = Variant<SpeakPayload>;

impl Speak {
    /// Content id from a `cid:` URL, or `""`.
    pub fn content_id(&self) -> &str {
        content_id(&self.payload.url)
    }
}
