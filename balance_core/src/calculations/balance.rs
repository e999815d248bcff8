//! # Line-Balance Calculation
//!
//! Derives takt time and per-station operator requirements from a line
//! configuration snapshot.
//!
//! ## Definitions
//!
//! - Takt time: available working seconds divided by daily demand; the
//!   maximum time per unit that still meets demand.
//! - Operators required: ceil(cycle time / takt time); the minimum integer
//!   head count so that per-operator effective cycle time fits within takt.
//! - Under/over-takt split: `min(cycle, takt)` and `max(cycle - takt, 0)`.
//!   The two always sum back to the station's cycle time, which is what a
//!   stacked bar with a takt reference line wants.
//!
//! ## Example
//!
//! ```rust
//! use balance_core::calculations::balance::calculate;
//! use balance_core::line::LineConfig;
//!
//! let line = LineConfig::starter();
//! let result = calculate(&line).unwrap();
//!
//! // 8 h * 3600 / 480 units = 60 s per unit
//! assert_eq!(result.takt_time_s, 60.0);
//! assert_eq!(result.total_operators, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BalanceError, BalanceResult};
use crate::line::LineConfig;
use crate::units::{Hours, Seconds};

/// Per-station derived row.
///
/// One entry per station, in line order, shaped for both a detail table and
/// a stacked bar chart (under-takt segment + over-takt segment against a
/// horizontal takt reference line).
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Station 1",
///   "cycle_time_s": 90.0,
///   "operators": 2,
///   "under_takt_s": 60.0,
///   "over_takt_s": 30.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationBalance {
    /// Station display name
    pub name: String,

    /// Total cycle time: sum of the station's process cycle times (s)
    pub cycle_time_s: f64,

    /// Minimum operators so per-operator time does not exceed takt
    pub operators: u32,

    /// Portion of cycle time that fits within takt: min(cycle, takt)
    pub under_takt_s: f64,

    /// Excess beyond takt: max(cycle - takt, 0)
    pub over_takt_s: f64,
}

impl StationBalance {
    /// True when the station fits within takt with a single operator.
    pub fn within_takt(&self) -> bool {
        self.over_takt_s == 0.0
    }
}

/// Full derived result set for one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBalance {
    /// Takt time in seconds per unit
    pub takt_time_s: f64,

    /// Sum of operators across all stations
    pub total_operators: u32,

    /// Per-station rows, in line order
    pub stations: Vec<StationBalance>,
}

impl LineBalance {
    /// True when every station fits within takt time.
    pub fn is_balanced(&self) -> bool {
        self.stations.iter().all(|s| s.within_takt())
    }

    /// The station with the largest cycle time, if any.
    pub fn bottleneck(&self) -> Option<&StationBalance> {
        self.stations
            .iter()
            .max_by(|a, b| a.cycle_time_s.total_cmp(&b.cycle_time_s))
    }
}

/// Calculate takt time and operator requirements for a line configuration.
///
/// Pure function: does not mutate its input, has no hidden state, and is
/// idempotent; two calls on an unchanged configuration return identical
/// results.
///
/// # Returns
///
/// * `Ok(LineBalance)` - the full derived result set
/// * `Err(BalanceError::InvalidParameter)` - daily demand or working hours
///   non-positive or non-finite (takt time would be undefined; nothing is
///   computed, no NaN or Infinity ever leaves this function)
/// * `Err(BalanceError::InvalidInput)` - a stored cycle time is negative or
///   non-finite (the editor rejects these; this guards hand-built configs)
///
/// # Example
///
/// ```rust
/// use balance_core::calculations::balance::calculate;
/// use balance_core::line::LineConfig;
///
/// let mut line = LineConfig::starter();
/// line.set_daily_demand(960.0).unwrap(); // takt drops to 30 s
///
/// let result = calculate(&line).unwrap();
/// assert_eq!(result.takt_time_s, 30.0);
/// // Station 1 needs ceil(60 / 30) = 2 operators now
/// assert_eq!(result.stations[0].operators, 2);
/// ```
pub fn calculate(line: &LineConfig) -> BalanceResult<LineBalance> {
    validate_parameters(line)?;

    let available: Seconds = Hours(line.working_hours).into();
    let takt_time_s = available.0 / line.daily_demand;

    let mut stations = Vec::with_capacity(line.stations.len());
    for station in &line.stations {
        for process in &station.processes {
            if !process.cycle_time_s.is_finite() || process.cycle_time_s < 0.0 {
                return Err(BalanceError::invalid_input(
                    "cycle_time_s",
                    process.cycle_time_s.to_string(),
                    format!(
                        "Process '{}' has an unusable cycle time",
                        process.description
                    ),
                ));
            }
        }

        let cycle_time_s = station.total_cycle_time_s();
        // ceil of 0/takt is 0, so empty stations need no special case
        let operators = (cycle_time_s / takt_time_s).ceil() as u32;

        stations.push(StationBalance {
            name: station.name.clone(),
            cycle_time_s,
            operators,
            under_takt_s: cycle_time_s.min(takt_time_s),
            over_takt_s: (cycle_time_s - takt_time_s).max(0.0),
        });
    }

    let total_operators = stations.iter().map(|s| s.operators).sum();

    Ok(LineBalance {
        takt_time_s,
        total_operators,
        stations,
    })
}

fn validate_parameters(line: &LineConfig) -> BalanceResult<()> {
    if !line.daily_demand.is_finite() || line.daily_demand <= 0.0 {
        return Err(BalanceError::invalid_parameter(
            "daily_demand",
            line.daily_demand.to_string(),
            "Daily demand must be positive for takt time to be defined",
        ));
    }
    if !line.working_hours.is_finite() || line.working_hours <= 0.0 {
        return Err(BalanceError::invalid_parameter(
            "working_hours",
            line.working_hours.to_string(),
            "Working hours must be positive for takt time to be defined",
        ));
    }
    Ok(())
}
