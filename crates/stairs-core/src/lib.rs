//! # stairs-core
//!
//! The step-counting engine for stairs - THE LOGIC.
//!
//! Counts the distinct ordered sequences of 1-step and 2-step moves that
//! climb a staircase of `n` stairs.
//!
//! ## Architectural Constraints
//!
//! - Pure: no I/O, no hidden state, no side effects
//! - Checked: results are `u128` and never wrap; counts above
//!   [`MAX_STAIRS`] fail with [`StairsError::Overflow`]
//! - Validated: negative input is rejected with
//!   [`StairsError::NegativeStairs`], never silently counted

// =============================================================================
// MODULES
// =============================================================================

pub mod counter;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use counter::{StepCounter, Ways, climb_stairs};
pub use primitives::{MAX_STAIRS, MAX_WAYS};
pub use types::{Climb, StairCount, StairsError};
