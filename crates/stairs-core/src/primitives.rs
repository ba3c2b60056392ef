//! # Innate Primitives
//!
//! Hardcoded constants for the stairs CORE.
//!
//! ## Primitives
//!
//! 1. **Move Primitive**: the only admissible move sizes.
//! 2. **Base Primitive**: the number of ways for the two base cases.
//! 3. **Range Primitive**: the largest stair count whose result fits in `u128`.

/// Move sizes a climber may take in a single move.
pub const MOVE_SIZES: [u64; 2] = [1, 2];

/// Ways to climb zero stairs (the empty sequence) and one stair.
///
/// Both recurrence accumulators start at this value.
pub const BASE_WAYS: u128 = 1;

/// Largest stair count whose number of ways fits in a `u128`.
///
/// - `ways(n)` equals the Fibonacci number `F(n + 1)`.
/// - `F(186)` is the largest Fibonacci number below `u128::MAX`.
pub const MAX_STAIRS: u64 = 185;

/// Number of ways to climb `MAX_STAIRS` stairs.
pub const MAX_WAYS: u128 = 332_825_110_087_067_562_321_196_029_789_634_457_848;
