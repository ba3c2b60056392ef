//! # CLI Command Implementations
//!
//! Each command validates its input, runs the counter and renders the
//! result as text or JSON. Rendering returns a `String`; printing is left
//! to [`super::execute`].

use serde::Serialize;
use stairs_core::{
    MAX_STAIRS, MAX_WAYS, StairCount, StairsError, StepCounter, primitives::MOVE_SIZES,
};
use std::fmt::Write as _;

/// Render any serializable value as pretty JSON.
fn to_json<T: Serialize>(value: &T) -> Result<String, StairsError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| StairsError::SerializationError(e.to_string()))
}

// =============================================================================
// COUNT COMMAND
// =============================================================================

/// Count the ways to climb `stairs` stairs.
pub fn cmd_count(stairs: &str, json_mode: bool) -> Result<String, StairsError> {
    let stairs: StairCount = stairs.parse()?;
    tracing::debug!(stairs = stairs.value(), "counting ways");

    let climb = StepCounter::new().climb(stairs)?;
    tracing::info!(stairs = climb.stairs, ways = %climb.ways, "counted");

    if json_mode {
        return to_json(&climb);
    }
    Ok(format!("{}", climb.ways))
}

// =============================================================================
// TABLE COMMAND
// =============================================================================

/// Show counts for every staircase in `0..=up_to`.
pub fn cmd_table(up_to: &str, json_mode: bool) -> Result<String, StairsError> {
    let up_to: StairCount = up_to.parse()?;
    let table = StepCounter::new().table(up_to)?;
    tracing::info!(rows = table.len(), "built table");

    if json_mode {
        return to_json(&table);
    }

    let width = table.last().map_or(1, |c| c.ways.to_string().len());
    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:>width$}", "stairs", "ways", width = width);
    for climb in &table {
        let _ = writeln!(
            out,
            "{:>6}  {:>width$}",
            climb.stairs,
            climb.ways,
            width = width
        );
    }
    Ok(out.trim_end().to_string())
}

// =============================================================================
// LIMITS COMMAND
// =============================================================================

/// Supported input range, as reported by `stairs limits`.
#[derive(Debug, Serialize)]
pub struct Limits {
    /// Largest supported staircase.
    pub max_stairs: u64,
    /// Number of ways for `max_stairs`.
    pub max_ways: u128,
    /// Admissible move sizes.
    pub move_sizes: [u64; 2],
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_stairs: MAX_STAIRS,
            max_ways: MAX_WAYS,
            move_sizes: MOVE_SIZES,
        }
    }
}

/// Show the supported input range.
pub fn cmd_limits(json_mode: bool) -> Result<String, StairsError> {
    let limits = Limits::default();

    if json_mode {
        return to_json(&limits);
    }

    Ok(format!(
        "Move sizes: {:?}\nMax stairs: {}\nMax ways:   {}",
        limits.move_sizes, limits.max_stairs, limits.max_ways
    ))
}
