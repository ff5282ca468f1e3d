//! avs codec library entry.
//!
//! This crate wires the protocol core into a byte-level codec with
//! configurable limits, a strict config loader, and the inspector used by the
//! `avs-codec` binary. It is intended to be consumed by the binary
//! (`main.rs`) and by transport layers that move envelopes as bytes.

pub mod codec;
pub mod config;
pub mod inspect;

pub use codec::Codec;
