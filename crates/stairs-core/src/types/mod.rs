//! # Core Type Definitions
//!
//! This module contains the core types for the stairs engine:
//! - Validated input (`StairCount`)
//! - Output structure (`Climb`)
//! - Error types (`StairsError`)
//!
//! ## Validation Guarantees
//!
//! A `StairCount` is never negative. Signed and textual input is checked
//! once, at construction, so the counter itself only sees valid counts.

use crate::primitives::MAX_STAIRS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// STAIR COUNT
// =============================================================================

/// A validated, non-negative number of stairs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct StairCount(pub u64);

impl StairCount {
    /// Create a stair count without a range check.
    #[must_use]
    pub const fn new(stairs: u64) -> Self {
        Self(stairs)
    }

    /// Create a stair count whose number of ways is representable.
    ///
    /// Returns `StairsError::Overflow` when `stairs` exceeds `MAX_STAIRS`.
    pub fn checked(stairs: u64) -> Result<Self, StairsError> {
        if stairs > MAX_STAIRS {
            return Err(StairsError::Overflow {
                stairs,
                max: MAX_STAIRS,
            });
        }
        Ok(Self(stairs))
    }

    /// Get the raw stair count.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for StairCount {
    type Error = StairsError;

    fn try_from(stairs: i64) -> Result<Self, Self::Error> {
        u64::try_from(stairs)
            .map(Self)
            .map_err(|_| StairsError::NegativeStairs(stairs))
    }
}

impl FromStr for StairCount {
    type Err = StairsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(stairs) = trimmed.parse::<u64>() {
            return Ok(Self(stairs));
        }
        // Distinguish "-3" from "abc" so negative input gets its own error
        match trimmed.parse::<i64>() {
            Ok(stairs) => Self::try_from(stairs),
            Err(_) => Err(StairsError::InvalidInput(format!(
                "'{}' is not a whole number of stairs",
                trimmed
            ))),
        }
    }
}

impl fmt::Display for StairCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CLIMB
// =============================================================================

/// One computed result: the number of ways to climb `stairs` stairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Climb {
    /// Number of stairs climbed.
    pub stairs: u64,
    /// Distinct ordered sequences of 1- and 2-step moves summing to `stairs`.
    pub ways: u128,
}

impl Climb {
    /// Create a new climb result.
    #[must_use]
    pub const fn new(stairs: u64, ways: u128) -> Self {
        Self { stairs, ways }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the stairs engine.
///
/// The CORE never panics; every failure is returned through this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StairsError {
    /// A negative stair count was supplied.
    #[error("Stair count must not be negative, got {0}")]
    NegativeStairs(i64),

    /// The number of ways does not fit in a `u128`.
    #[error("Stair count {stairs} exceeds the maximum supported {max}")]
    Overflow {
        /// The requested stair count.
        stairs: u64,
        /// The largest supported stair count.
        max: u64,
    },

    /// The input could not be parsed as a stair count.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A serialization error occurred while rendering output.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// =============================================================================
// TESTS
// =============================================================================
