//! # balance_core - Line-Balancing Calculation Engine
//!
//! `balance_core` is the computational heart of Lineflow, deriving takt
//! time and operator requirements from an editable production-line model.
//! All inputs and outputs are JSON-serializable, so any presentation layer
//! (forms, tables, stacked charts) can consume it directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless calculation**: a pure function from a configuration
//!   snapshot to a full derived result set, recomputed on every request
//! - **Validated edits**: bad values are rejected at the edit boundary, so
//!   the calculator never sees them (and still defends against them)
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use balance_core::calculations::balance::calculate;
//! use balance_core::line::LineConfig;
//!
//! let mut line = LineConfig::starter();
//! line.set_daily_demand(480.0).unwrap();
//!
//! let result = calculate(&line).unwrap();
//! println!("Takt time: {:.1}s", result.takt_time_s);
//! println!("Total operators: {}", result.total_operators);
//! ```
//!
//! ## Modules
//!
//! - [`line`] - The editable line configuration (stations, processes,
//!   production parameters)
//! - [`calculations`] - Derivation of takt time and operator counts
//! - [`units`] - Hours/seconds newtype wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod line;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, LineBalance, StationBalance};
pub use errors::{BalanceError, BalanceResult};
pub use line::{LineConfig, Process, ProcessUpdate, Station};
