//! Shared error type across avs crates.

use thiserror::Error;

/// Stable error codes, safe to match on in tests and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Top-level structure could not be decoded.
    Decode,
    /// A message could not be encoded.
    Encode,
    /// `namespace` or `name` missing where required.
    MissingHeader,
    /// Message exceeds the configured size limit.
    TooLarge,
    /// Config could not be parsed or failed validation.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Decode => "DECODE_ERROR",
            ErrorCode::Encode => "ENCODE_ERROR",
            ErrorCode::MissingHeader => "MISSING_HEADER",
            ErrorCode::TooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AvsError>;

/// Unified error type used by core and codec.
#[derive(Debug, Error)]
pub enum AvsError {
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
    #[error("missing header key: {0}")]
    MissingHeader(&'static str),
    #[error("message too large: {len} bytes (limit {limit})")]
    TooLarge { len: usize, limit: usize },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl AvsError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AvsError::Decode(_) => ErrorCode::Decode,
            AvsError::Encode(_) => ErrorCode::Encode,
            AvsError::MissingHeader(_) => ErrorCode::MissingHeader,
            AvsError::TooLarge { .. } => ErrorCode::TooLarge,
            AvsError::Config(_) => ErrorCode::InvalidConfig,
            AvsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
        }
    }
}
