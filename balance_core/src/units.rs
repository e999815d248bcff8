//! # Unit Types
//!
//! Lightweight newtype wrappers for the two time units the calculator
//! mixes: the working day is entered in hours, everything else (cycle
//! times, takt time) is in seconds.
//!
//! Most struct fields stay plain `f64` with a unit-suffixed name; the
//! wrappers exist so the hours-to-seconds conversion lives in one place.
//!
//! ## Example
//!
//! ```rust
//! use balance_core::units::{Hours, Seconds};
//!
//! let shift = Hours(8.0);
//! let available: Seconds = shift.into();
//! assert_eq!(available.0, 28800.0);
//! ```

use serde::{Deserialize, Serialize};

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

/// Duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl From<Hours> for Seconds {
    fn from(h: Hours) -> Self {
        Seconds(h.0 * 3600.0)
    }
}

impl From<Seconds> for Hours {
    fn from(s: Seconds) -> Self {
        Hours(s.0 / 3600.0)
    }
}
