use serde::Deserialize;
use avs_core::error::{AvsError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    pub version: u32,

    #[serde(default)]
    pub codec: CodecSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            version: 1,
            codec: CodecSection::default(),
            log: LogSection::default(),
        }
    }
}

impl CodecConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AvsError::UnsupportedVersion);
        }

        self.codec.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecSection {
    /// Upper bound for a single encoded or decoded message.
    #[serde(default = "default_max_message_bytes")]
    pub max_message_bytes: usize,

    /// Reject messages whose header lacks `namespace` or `name`.
    #[serde(default)]
    pub require_header: bool,
}

impl Default for CodecSection {
    fn default() -> Self {
        Self {
            max_message_bytes: default_max_message_bytes(),
            require_header: false,
        }
    }
}

impl CodecSection {
    pub fn validate(&self) -> Result<()> {
        if !(256..=16 * 1024 * 1024).contains(&self.max_message_bytes) {
            return Err(AvsError::Config(
                "codec.max_message_bytes must be between 256 and 16777216".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl LogSection {
    pub fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(AvsError::Config("log.filter must not be empty".into()));
        }
        Ok(())
    }
}

fn default_max_message_bytes() -> usize {
    64 * 1024
}
fn default_log_filter() -> String {
    "info".into()
}
