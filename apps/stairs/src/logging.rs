//! # Logging Setup
//!
//! Configures `tracing-subscriber` from the environment:
//!
//! - `STAIRS_LOG_FORMAT`: `json` for machine-parseable lines, anything else for text
//! - `RUST_LOG`: standard `EnvFilter` directives (default: `stairs=info`)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "stairs=info";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text.
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to text.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Read the format from `STAIRS_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var("STAIRS_LOG_FORMAT")
            .map(|v| Self::parse(&v))
            .unwrap_or(Self::Text)
    }
}

/// Install the global subscriber.
///
/// `verbose` raises the default filter to `debug` when `RUST_LOG` is unset.
pub fn init(format: LogFormat, verbose: bool) {
    let default = if verbose { "stairs=debug" } else { DEFAULT_FILTER };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default.into());

    // Logs go to stderr so stdout stays clean for results
    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
