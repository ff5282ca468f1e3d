//! avs core: protocol primitives for voice-assistant device messages.
//!
//! This crate defines the generic `header + payload` envelope shared by
//! contexts, events and directives, the closed table of message kinds the
//! device understands, and the conversion that turns an envelope into a
//! strongly-typed variant. It carries no transport or runtime dependencies so
//! the dispatcher and transport layers can both build on it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Structural failures surface as `AvsError`/`Result`; payload-level
//! mismatches never fail at all and fall back to zero values.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod interfaces;
pub mod protocol;

/// Shared result type.
pub use error::{AvsError, Result};
pub use protocol::kind::MessageKind;
pub use protocol::message::{new_message_id, Header, Message};
pub use protocol::typed::{typed, Payload, TypedMessage, Variant};
