//! avs-codec inspector
//!
//! Reads newline-delimited wire messages from a file (first argument) or
//! stdin and prints one typed summary per message.
//! - Config: `AVS_CONFIG` points at a YAML file; defaults apply when unset
//! - Logging: `RUST_LOG`, falling back to `log.filter` from the config

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use avs_codec::config::{self, CodecConfig};
use avs_codec::{inspect, Codec};

fn main() -> ExitCode {
    let cfg = match std::env::var("AVS_CONFIG") {
        Ok(path) => match config::load_from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("config load failed: {e}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => CodecConfig::default(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => {
                tracing::error!(%path, error = %e, "failed to open input");
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let codec = Codec::new(&cfg.codec);
    tracing::info!(max_message_bytes = codec.max_message_bytes(), "avs-codec inspecting");

    match inspect::inspect_lines(&codec, input, &mut io::stdout().lock()) {
        Ok(stats) => {
            tracing::info!(
                typed = stats.typed,
                generic = stats.generic,
                rejected = stats.rejected,
                "done"
            );
            if stats.rejected > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "inspection failed");
            ExitCode::FAILURE
        }
    }
}
