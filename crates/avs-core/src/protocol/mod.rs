//! Protocol modules: envelope, kind registry, and typed conversion.
//!
//! - `message`: the generic header + payload envelope, stored with a lazy
//!   `RawValue` payload so it can flow through the system undecoded.
//! - `kind`: the closed table of `(namespace, name)` pairs the device knows.
//! - `typed`: conversion from envelope to one of the typed variants.
//! - `lenient`: serde helpers that turn mismatched payload fields into zero
//!   values instead of errors.
//!
//! Only top-level structure can fail to decode. Everything below the
//! envelope is best-effort, so an evolving payload shape never blocks routing.

pub mod kind;
pub mod lenient;
pub mod message;
pub mod typed;
