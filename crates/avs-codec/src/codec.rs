//! Decode-once codec for transport collaborators.
//!
//! - bytes => `Message` (lazy `RawValue` payload), size-checked first
//! - bytes => `TypedMessage` via the closed kind table
//! - `TypedMessage` / `Message` => `Bytes`, with the same size limit
//!
//! Only top-level structure and configured limits can fail here; payload
//! mismatches are absorbed by the typed conversion.

use bytes::Bytes;

use avs_core::error::{AvsError, Result};
use avs_core::protocol::message::{keys, Message};
use avs_core::protocol::typed::TypedMessage;

use crate::config::CodecSection;

#[derive(Debug, Clone)]
pub struct Codec {
    max_message_bytes: usize,
    require_header: bool,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(&CodecSection::default())
    }
}

impl Codec {
    pub fn new(cfg: &CodecSection) -> Self {
        Self {
            max_message_bytes: cfg.max_message_bytes,
            require_header: cfg.require_header,
        }
    }

    pub fn max_message_bytes(&self) -> usize {
        self.max_message_bytes
    }

    /// Decode wire bytes into a generic message.
    pub fn decode(&self, bytes: &[u8]) -> Result<Message> {
        self.check_len(bytes.len())?;
        let msg = Message::from_slice(bytes)?;

        if self.require_header {
            if msg.namespace().is_empty() {
                return Err(AvsError::MissingHeader(keys::NAMESPACE));
            }
            if msg.name().is_empty() {
                return Err(AvsError::MissingHeader(keys::NAME));
            }
        }
        Ok(msg)
    }

    /// Decode wire bytes straight into the most specific representation.
    pub fn decode_typed(&self, bytes: &[u8]) -> Result<TypedMessage> {
        let typed = self.decode(bytes)?.typed();
        tracing::trace!(
            discriminator = %typed.message(),
            typed = typed.is_typed(),
            "decoded message"
        );
        Ok(typed)
    }

    /// Encode a typed message, re-encoding its payload.
    pub fn encode(&self, msg: &TypedMessage) -> Result<Bytes> {
        let out = msg.to_bytes()?;
        self.check_len(out.len())?;
        Ok(out)
    }

    /// Encode a generic message as it is.
    pub fn encode_message(&self, msg: &Message) -> Result<Bytes> {
        let out = msg.to_bytes()?;
        self.check_len(out.len())?;
        Ok(out)
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len > self.max_message_bytes {
            tracing::warn!(len, limit = self.max_message_bytes, "message exceeds size limit");
            return Err(AvsError::TooLarge {
                len,
                limit: self.max_message_bytes,
            });
        }
        Ok(())
    }
}
