//! Generic envelope (JSON) shared by contexts, events and directives.
//!
//! The payload is kept as `RawValue` until a typed variant asks for it, so a
//! message can be parsed, routed and re-serialized without ever committing to
//! a payload schema.

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{AvsError, Result};
use crate::protocol::typed::TypedMessage;

/// Header keys with protocol meaning.
pub mod keys {
    pub const NAMESPACE: &str = "namespace";
    pub const NAME: &str = "name";
    pub const MESSAGE_ID: &str = "messageId";
    pub const DIALOG_REQUEST_ID: &str = "dialogRequestId";
}

/// Header map. Key order carries no meaning; `BTreeMap` keeps output stable.
pub type Header = BTreeMap<String, String>;

/// A context, event or directive as it appears on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    /// String-to-string header. `namespace` and `name` select the kind.
    pub header: Header,
    /// Optional payload, stored as raw JSON (lazy parsing).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Box<RawValue>>,
}

impl Message {
    /// Build a message suited for use as a context value.
    pub fn new_context(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let mut header = Header::new();
        header.insert(keys::NAMESPACE.into(), namespace.into());
        header.insert(keys::NAME.into(), name.into());
        Self {
            header,
            payload: None,
        }
    }

    /// Build a message suited for use as an event value.
    ///
    /// `dialogRequestId` is only written when a non-empty value is given; an
    /// empty string leaves the key absent.
    pub fn new_event(
        namespace: impl Into<String>,
        name: impl Into<String>,
        message_id: impl Into<String>,
        dialog_request_id: Option<&str>,
    ) -> Self {
        let mut m = Self::new_context(namespace, name);
        m.header.insert(keys::MESSAGE_ID.into(), message_id.into());
        if let Some(id) = dialog_request_id.filter(|id| !id.is_empty()) {
            m.header.insert(keys::DIALOG_REQUEST_ID.into(), id.to_string());
        }
        m
    }

    /// Decode a message from wire bytes.
    ///
    /// Only the top-level shape is checked here; the payload stays undecoded.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| AvsError::Decode(format!("invalid message json: {e}")))
    }

    /// Decode a message from a JSON string.
    pub fn from_json(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }

    /// Encode to wire bytes.
    pub fn to_bytes(&self) -> Result<Bytes> {
        serde_json::to_vec(self)
            .map(Bytes::from)
            .map_err(|e| AvsError::Encode(format!("message json: {e}")))
    }

    /// Header value for `key`, or `""` when absent.
    pub fn header_value(&self, key: &str) -> &str {
        self.header.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn namespace(&self) -> &str {
        self.header_value(keys::NAMESPACE)
    }

    pub fn name(&self) -> &str {
        self.header_value(keys::NAME)
    }

    pub fn message_id(&self) -> &str {
        self.header_value(keys::MESSAGE_ID)
    }

    pub fn dialog_request_id(&self) -> &str {
        self.header_value(keys::DIALOG_REQUEST_ID)
    }

    /// `"{namespace}.{name}"`. Missing segments are rendered empty (`"."`).
    pub fn discriminator(&self) -> String {
        format!("{}.{}", self.namespace(), self.name())
    }

    /// True when both `namespace` and `name` are present and non-empty.
    pub fn is_well_formed(&self) -> bool {
        !self.namespace().is_empty() && !self.name().is_empty()
    }

    /// Raw payload JSON exactly as received, if any.
    pub fn raw_payload(&self) -> Option<&str> {
        self.payload.as_deref().map(RawValue::get)
    }

    /// Convert into the most specific known representation.
    ///
    /// Never fails: unknown kinds come back as `TypedMessage::Message`.
    pub fn typed(self) -> TypedMessage {
        crate::protocol::typed::typed(self)
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.raw_payload() == other.raw_payload()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace(), self.name())
    }
}

/// Generate a fresh random message id.
pub fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
