//! # Stairs
//!
//! Command-line entry point for the stairs counting engine.
//!
//! ## Usage
//!
//! ```bash
//! stairs count 10
//! stairs table --up-to 20
//! stairs --json-mode count 185
//! STAIRS_LOG_FORMAT=json stairs -v limits
//! ```

use clap::Parser;
use stairs::{cli, logging};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    logging::init(logging::LogFormat::from_env(), cli.verbose);

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
