//! Top-level facade crate for avs.
//!
//! Re-exports the protocol core and the codec so users can depend on a single crate.

pub mod core {
    pub use avs_core::*;
}

pub mod codec {
    pub use avs_codec::*;
}
