//! # Step Counter
//!
//! Counts the distinct ordered sequences of 1- and 2-step moves that climb
//! exactly `n` stairs.
//!
//! The count follows the Fibonacci recurrence:
//!
//! ```text
//! ways(0) = 1
//! ways(1) = 1
//! ways(k) = ways(k - 1) + ways(k - 2)    for k >= 2
//! ```
//!
//! Every entry point runs a single forward pass over two `u128`
//! accumulators: O(n) time, O(1) extra space. Results never wrap; any
//! stair count above `MAX_STAIRS` is rejected with `StairsError::Overflow`.

use crate::primitives::{BASE_WAYS, MAX_STAIRS};
use crate::types::{Climb, StairCount, StairsError};

/// Number of ways to climb `stairs` stairs with 1- and 2-step moves.
///
/// ```
/// assert_eq!(stairs_core::climb_stairs(5), Ok(8));
/// ```
pub fn climb_stairs(stairs: u64) -> Result<u128, StairsError> {
    StepCounter::new().ways(StairCount::new(stairs))
}

// =============================================================================
// STEP COUNTER
// =============================================================================

/// Stateless counter over the 1/2-step recurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounter;

impl StepCounter {
    /// Create a new counter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Number of ways to climb `stairs`.
    pub fn ways(&self, stairs: StairCount) -> Result<u128, StairsError> {
        let stairs = StairCount::checked(stairs.value())?;

        // prev = ways(k - 1), curr = ways(k)
        let mut prev = BASE_WAYS;
        let mut curr = BASE_WAYS;
        for _ in 2..=stairs.value() {
            let next = advance(stairs.value(), prev, curr)?;
            prev = curr;
            curr = next;
        }

        Ok(curr)
    }

    /// Number of ways to climb `stairs`, paired with the stair count.
    pub fn climb(&self, stairs: StairCount) -> Result<Climb, StairsError> {
        self.ways(stairs).map(|ways| Climb::new(stairs.value(), ways))
    }

    /// Results for every stair count in `0..=up_to`, from one forward pass.
    pub fn table(&self, up_to: StairCount) -> Result<Vec<Climb>, StairsError> {
        let up_to = StairCount::checked(up_to.value())?;
        Ok(self.iter().take_while(|c| c.stairs <= up_to.value()).collect())
    }

    /// Iterate over results for 0, 1, 2, … up to and including `MAX_STAIRS`.
    #[must_use]
    pub fn iter(&self) -> Ways {
        Ways::new()
    }
}

/// One step of the recurrence, failing instead of wrapping.
fn advance(stairs: u64, prev: u128, curr: u128) -> Result<u128, StairsError> {
    prev.checked_add(curr).ok_or(StairsError::Overflow {
        stairs,
        max: MAX_STAIRS,
    })
}

// =============================================================================
// WAYS ITERATOR
// =============================================================================

/// Iterator yielding `Climb` results in increasing stair order.
///
/// Stops after `MAX_STAIRS`; the next result would not fit in a `u128`.
#[derive(Debug, Clone)]
pub struct Ways {
    next_stairs: u64,
    prev: u128,
    curr: u128,
}

impl Ways {
    fn new() -> Self {
        Self {
            next_stairs: 0,
            prev: BASE_WAYS,
            curr: BASE_WAYS,
        }
    }
}

impl Iterator for Ways {
    type Item = Climb;

    fn next(&mut self) -> Option<Climb> {
        let stairs = self.next_stairs;
        match stairs {
            0 | 1 => {}
            s if s > MAX_STAIRS => return None,
            _ => {
                let next = self.prev.checked_add(self.curr)?;
                self.prev = self.curr;
                self.curr = next;
            }
        }
        self.next_stairs = stairs.saturating_add(1);
        Some(Climb::new(stairs, self.curr))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (MAX_STAIRS + 1).saturating_sub(self.next_stairs) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ways {}

// =============================================================================
// TESTS
// =============================================================================
