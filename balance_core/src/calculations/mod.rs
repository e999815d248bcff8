//! # Line-Balancing Calculations
//!
//! Each calculation follows the pattern:
//!
//! - Input: a borrowed snapshot of the line configuration
//! - `calculate(input) -> Result<*Result, BalanceError>` - pure function
//! - `*Result` - derived values (JSON-serializable), recomputed in full on
//!   every call, never patched incrementally
//!
//! ## Available Calculations
//!
//! - [`balance`] - takt time, per-station operator requirements, and the
//!   under/over-takt breakdown for a stacked chart

pub mod balance;

// Re-export commonly used types
pub use balance::{calculate, LineBalance, StationBalance};
