//! # Stairs CLI Library
//!
//! Command definitions and renderers for the `stairs` binary, exposed as a
//! library so integration tests can drive them without spawning a process.

pub mod cli;
pub mod logging;
