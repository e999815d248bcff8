//! # Error Types
//!
//! Structured error types for balance_core. Each variant carries enough
//! context for a consumer to show a corrective message instead of a blank
//! or broken chart.
//!
//! ## Example
//!
//! ```rust
//! use balance_core::errors::{BalanceError, BalanceResult};
//!
//! fn validate_demand(units_per_day: f64) -> BalanceResult<()> {
//!     if units_per_day <= 0.0 {
//!         return Err(BalanceError::InvalidParameter {
//!             field: "daily_demand".to_string(),
//!             value: units_per_day.to_string(),
//!             reason: "Daily demand must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for balance_core operations
pub type BalanceResult<T> = Result<T, BalanceError>;

/// Structured error type for line-balancing operations.
///
/// Parameter and input errors block calculation; not-found errors are
/// recoverable structural misses that a consumer may treat as no-ops.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BalanceError {
    /// A production parameter makes takt time undefined (e.g. zero demand)
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// An edited value is out of range or not a usable number
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A structural edit referenced a station that is no longer present
    #[error("Station not found: {station_id}")]
    StationNotFound { station_id: Uuid },

    /// A structural edit referenced a process that is no longer present
    #[error("Process not found: {process_id} in station {station_id}")]
    ProcessNotFound {
        station_id: Uuid,
        process_id: Uuid,
    },
}

impl BalanceError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BalanceError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BalanceError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a StationNotFound error
    pub fn station_not_found(station_id: Uuid) -> Self {
        BalanceError::StationNotFound { station_id }
    }

    /// Create a ProcessNotFound error
    pub fn process_not_found(station_id: Uuid, process_id: Uuid) -> Self {
        BalanceError::ProcessNotFound {
            station_id,
            process_id,
        }
    }

    /// Check if this is a recoverable error (a no-op from the UI's view)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BalanceError::StationNotFound { .. } | BalanceError::ProcessNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BalanceError::InvalidParameter { .. } => "INVALID_PARAMETER",
            BalanceError::InvalidInput { .. } => "INVALID_INPUT",
            BalanceError::StationNotFound { .. } => "STATION_NOT_FOUND",
            BalanceError::ProcessNotFound { .. } => "PROCESS_NOT_FOUND",
        }
    }
}
