//! # Stairs CLI Module
//!
//! This module implements the CLI interface for stairs.
//!
//! ## Available Commands
//!
//! - `count` - Count the ways to climb N stairs
//! - `table` - Show counts for every staircase up to N
//! - `limits` - Show the supported input range

mod commands;

use clap::{Parser, Subcommand};
use stairs_core::StairsError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Stairs - count the ways to climb a staircase
///
/// Each move climbs one or two stairs. A way is one ordered sequence of
/// moves that reaches the top exactly.
#[derive(Parser, Debug)]
#[command(name = "stairs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count the ways to climb N stairs
    Count {
        /// Number of stairs (negative values are rejected)
        #[arg(allow_negative_numbers = true)]
        stairs: String,
    },

    /// Show counts for every staircase from 0 up to N
    Table {
        /// Largest staircase to include
        #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
        up_to: String,
    },

    /// Show the largest supported staircase and its count
    Limits,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), StairsError> {
    let json_mode = cli.json_mode;

    let output = match cli.command {
        Commands::Count { stairs } => cmd_count(&stairs, json_mode)?,
        Commands::Table { up_to } => cmd_table(&up_to, json_mode)?,
        Commands::Limits => cmd_limits(json_mode)?,
    };

    println!("{}", output);
    Ok(())
}
