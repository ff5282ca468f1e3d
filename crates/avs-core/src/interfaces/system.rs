//! `System` interface.

use serde::{Deserialize, Serialize};

use crate::protocol::kind::MessageKind;
use crate::protocol::lenient;
use crate::protocol::typed::{Payload, Variant};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionPayload {
    #[serde(default, deserialize_with = "lenient::field")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient::field")]
    pub description: String,
}

impl Payload for ExceptionPayload {
    const KIND: MessageKind = MessageKind::Exception;
}

/// The `Exception` message.
pub type Exception = Variant<ExceptionPayload>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynchronizeStatePayload {}

impl Payload for SynchronizeStatePayload {
    const KIND: MessageKind = MessageKind::SynchronizeState;
}

/// The `SynchronizeState` event.
pub type SynchronizeState = Variant<SynchronizeStatePayload>;

impl SynchronizeState {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self::new_event(message_id, None, SynchronizeStatePayload {})
    }
}
