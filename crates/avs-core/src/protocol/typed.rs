//! Typed conversion: envelope -> variant.
//!
//! A `Variant<P>` owns exactly one `Message` plus the payload decoded into
//! `P`. The original message is kept untouched, so the raw payload stays
//! inspectable even when decoding fell back to zero values.

use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{AvsError, Result};
use crate::interfaces::audio_player::{ClearQueue, Play, PlaybackState, Stop};
use crate::interfaces::speech_recognizer::{ExpectSpeech, ExpectSpeechTimedOut, Recognize};
use crate::interfaces::speech_synthesizer::Speak;
use crate::interfaces::system::{Exception, SynchronizeState};
use crate::protocol::kind::MessageKind;
use crate::protocol::lenient;
use crate::protocol::message::Message;

/// Payload schema of one message kind.
pub trait Payload: Serialize + DeserializeOwned + Default + Clone + fmt::Debug {
    /// The kind this payload belongs to.
    const KIND: MessageKind;
}

/// A message together with its decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant<P> {
    message: Message,
    /// Best-effort decoded payload.
    pub payload: P,
}

impl<P: Payload> Variant<P> {
    /// Decode `message`'s payload leniently. Never fails.
    pub fn decode(message: Message) -> Self {
        let payload = lenient::payload(message.payload.as_deref());
        Self { message, payload }
    }

    /// Build an outbound context of this kind.
    pub fn new_context(payload: P) -> Self {
        let message = Message::new_context(P::KIND.namespace(), P::KIND.name());
        Self { message, payload }
    }

    /// Build an outbound event of this kind.
    pub fn new_event(
        message_id: impl Into<String>,
        dialog_request_id: Option<&str>,
        payload: P,
    ) -> Self {
        let message = Message::new_event(
            P::KIND.namespace(),
            P::KIND.name(),
            message_id,
            dialog_request_id,
        );
        Self { message, payload }
    }

    pub fn kind(&self) -> MessageKind {
        P::KIND
    }

    /// Underlying message, exactly as received or constructed.
    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_parts(self) -> (Message, P) {
        (self.message, self.payload)
    }

    /// Underlying header with the typed payload re-encoded into the payload slot.
    pub fn into_message(self) -> Result<Message> {
        let raw = serde_json::value::to_raw_value(&self.payload)
            .map_err(|e| AvsError::Encode(format!("{} payload: {e}", P::KIND)))?;
        Ok(Message {
            header: self.message.header,
            payload: Some(raw),
        })
    }

    /// Encode to wire bytes.
    pub fn to_bytes(&self) -> Result<Bytes> {
        serde_json::to_vec(self)
            .map(Bytes::from)
            .map_err(|e| AvsError::Encode(format!("{}: {e}", P::KIND)))
    }
}

impl<P> AsRef<Message> for Variant<P> {
    fn as_ref(&self) -> &Message {
        &self.message
    }
}

impl<P: Serialize> Serialize for Variant<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Message", 2)?;
        s.serialize_field("header", &self.message.header)?;
        s.serialize_field("payload", &self.payload)?;
        s.end()
    }
}

/// Either one of the known variants or the generic message.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedMessage {
    ClearQueue(ClearQueue),
    Exception(Exception),
    ExpectSpeech(ExpectSpeech),
    ExpectSpeechTimedOut(ExpectSpeechTimedOut),
    Play(Play),
    PlaybackState(PlaybackState),
    Recognize(Recognize),
    Speak(Speak),
    Stop(Stop),
    SynchronizeState(SynchronizeState),
    /// Unknown kind, kept as received.
    Message(Message),
}

// Applies `$known` to whichever variant is held, or `$generic` to the fallback.
macro_rules! each_variant {
    ($value:expr, $v:ident => $known:expr, $m:ident => $generic:expr) => {
        match $value {
            TypedMessage::ClearQueue($v) => $known,
            TypedMessage::Exception($v) => $known,
            TypedMessage::ExpectSpeech($v) => $known,
            TypedMessage::ExpectSpeechTimedOut($v) => $known,
            TypedMessage::Play($v) => $known,
            TypedMessage::PlaybackState($v) => $known,
            TypedMessage::Recognize($v) => $known,
            TypedMessage::Speak($v) => $known,
            TypedMessage::Stop($v) => $known,
            TypedMessage::SynchronizeState($v) => $known,
            TypedMessage::Message($m) => $generic,
        }
    };
}

impl TypedMessage {
    /// Underlying message.
    pub fn message(&self) -> &Message {
        each_variant!(self, v => v.message(), m => m)
    }

    /// Known kind, or `None` for the generic fallback.
    pub fn kind(&self) -> Option<MessageKind> {
        each_variant!(self, v => Some(v.kind()), _m => None)
    }

    pub fn is_typed(&self) -> bool {
        self.kind().is_some()
    }

    /// Generic message; typed payloads are re-encoded.
    pub fn into_message(self) -> Result<Message> {
        each_variant!(self, v => v.into_message(), m => Ok(m))
    }

    /// Re-run conversion. Already typed values are returned as they are.
    pub fn typed(self) -> TypedMessage {
        match self {
            TypedMessage::Message(m) => typed(m),
            other => other,
        }
    }

    /// Encode to wire bytes.
    pub fn to_bytes(&self) -> Result<Bytes> {
        each_variant!(self, v => v.to_bytes(), m => m.to_bytes())
    }
}

impl Serialize for TypedMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        each_variant!(self, v => v.serialize(serializer), m => m.serialize(serializer))
    }
}

impl From<Message> for TypedMessage {
    fn from(message: Message) -> Self {
        typed(message)
    }
}

/// Convert a message into the most specific known representation.
///
/// Known discriminators always produce their variant, whatever the payload
/// holds. Unknown ones come back unchanged as `TypedMessage::Message`.
pub fn typed(message: Message) -> TypedMessage {
    let Some(kind) = MessageKind::lookup(message.namespace(), message.name()) else {
        tracing::trace!(discriminator = %message, "unknown message kind, left generic");
        return TypedMessage::Message(message);
    };

    match kind {
        MessageKind::ClearQueue => TypedMessage::ClearQueue(Variant::decode(message)),
        MessageKind::Exception => TypedMessage::Exception(Variant::decode(message)),
        MessageKind::ExpectSpeech => TypedMessage::ExpectSpeech(Variant::decode(message)),
        MessageKind::ExpectSpeechTimedOut => {
            TypedMessage::ExpectSpeechTimedOut(Variant::decode(message))
        }
        MessageKind::Play => TypedMessage::Play(Variant::decode(message)),
        MessageKind::PlaybackState => TypedMessage::PlaybackState(Variant::decode(message)),
        MessageKind::Recognize => TypedMessage::Recognize(Variant::decode(message)),
        MessageKind::Speak => TypedMessage::Speak(Variant::decode(message)),
        MessageKind::Stop => TypedMessage::Stop(Variant::decode(message)),
        MessageKind::SynchronizeState => TypedMessage::SynchronizeState(Variant::decode(message)),
    }
}
