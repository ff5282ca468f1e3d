//! Codec config loader (strict parsing).

pub mod schema;

use std::fs;

use avs_core::error::{AvsError, Result};

pub use schema::{CodecConfig, CodecSection, LogSection};

pub fn load_from_file(path: &str) -> Result<CodecConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AvsError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<CodecConfig> {
    let cfg: CodecConfig =
        serde_yaml::from_str(s).map_err(|e| AvsError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
