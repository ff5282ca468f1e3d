//! Payload schemas grouped by interface namespace.
//!
//! Each module declares the payload structs of its namespace, the variant
//! aliases (`Variant<Payload>`), and the constructors and accessors derived
//! from them. All payload fields decode leniently.

use std::time::Duration;

pub mod audio_player;
pub mod speech_recognizer;
pub mod speech_synthesizer;
pub mod system;

/// URL scheme for content carried in the same multipart response.
pub const CID_SCHEME: &str = "cid:";

/// Content id of a `cid:` URL, or `""` for any other URL. Case-sensitive.
pub fn content_id(url: &str) -> &str {
    url.strip_prefix(CID_SCHEME).unwrap_or_default()
}

/// Millisecond count (as carried on the wire) to a duration.
///
/// Negative, NaN and infinite inputs map to zero.
pub fn duration_from_millis(ms: f64) -> Duration {
    let nanos = ms * 1_000_000.0;
    if !nanos.is_finite() || nanos <= 0.0 {
        return Duration::ZERO;
    }
    // `as` saturates at u64::MAX.
    Duration::from_nanos(nanos.round() as u64)
}

/// Duration to milliseconds as carried on the wire. Sub-nanosecond detail is
/// lost to `f64` precision.
pub fn millis_from_duration(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
