//! # Line Configuration
//!
//! The `LineConfig` struct is the single mutable root the operator edits:
//! an ordered sequence of stations (each owning an ordered sequence of
//! processes) plus the two global production parameters.
//!
//! ## Structure
//!
//! ```text
//! LineConfig
//! ├── meta: LineMetadata (schema version, timestamps)
//! ├── working_hours: f64 (hours per day, > 0)
//! ├── daily_demand: f64 (units per day, > 0)
//! └── stations: Vec<Station>
//!     └── processes: Vec<Process>
//! ```
//!
//! Stations and processes carry UUIDv4 identifiers. IDs are never derived
//! from collection length, so deleting a station and adding another cannot
//! produce a collision.
//!
//! ## Example
//!
//! ```rust
//! use balance_core::line::LineConfig;
//!
//! let mut line = LineConfig::starter();
//! let id = line.add_station();
//! assert_eq!(line.station_count(), 3);
//!
//! line.remove_station(&id);
//! assert_eq!(line.station_count(), 2);
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&line).unwrap();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BalanceError, BalanceResult};

/// Current schema version for serialized line configurations
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Default working day in hours
pub const DEFAULT_WORKING_HOURS: f64 = 8.0;

/// Default daily demand in units
pub const DEFAULT_DAILY_DEMAND: f64 = 480.0;

/// Description given to a freshly added process
pub const DEFAULT_PROCESS_DESCRIPTION: &str = "New Process";

/// Cycle time given to a freshly added process, in seconds
pub const DEFAULT_PROCESS_CYCLE_TIME_S: f64 = 30.0;

/// A unit of work within a station.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "a3a0d4ae-2f5e-4f8b-9c1d-6f1b2e3c4d5e",
///   "description": "Assembly",
///   "cycle_time_s": 45.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier (UUIDv4)
    pub id: Uuid,

    /// Free-text label for the task
    pub description: String,

    /// Time to complete this task once, in seconds (non-negative)
    pub cycle_time_s: f64,
}

impl Process {
    /// Create a process with a fresh UUID.
    pub fn new(description: impl Into<String>, cycle_time_s: f64) -> Self {
        Process {
            id: Uuid::new_v4(),
            description: description.into(),
            cycle_time_s,
        }
    }

    fn default_new() -> Self {
        Process::new(DEFAULT_PROCESS_DESCRIPTION, DEFAULT_PROCESS_CYCLE_TIME_S)
    }
}

/// One point on the production line, grouping an ordered list of processes.
///
/// Processes are exclusively owned: removing a station removes its
/// processes with it. Order matters for display only; the station's total
/// cycle time is an order-independent sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Unique identifier (UUIDv4)
    pub id: Uuid,

    /// Display label (e.g., "Station 1")
    pub name: String,

    /// Owned processes, in display order
    pub processes: Vec<Process>,
}

impl Station {
    /// Create a station with a fresh UUID and the given processes.
    pub fn new(name: impl Into<String>, processes: Vec<Process>) -> Self {
        Station {
            id: Uuid::new_v4(),
            name: name.into(),
            processes,
        }
    }

    /// Total cycle time: the sum of all process cycle times, in seconds.
    ///
    /// 0.0 for a station with no processes.
    pub fn total_cycle_time_s(&self) -> f64 {
        self.processes.iter().map(|p| p.cycle_time_s).sum()
    }
}

/// Metadata attached to a line configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the configuration was created
    pub created: DateTime<Utc>,

    /// When the configuration was last modified
    pub modified: DateTime<Utc>,
}

impl LineMetadata {
    fn now() -> Self {
        let now = Utc::now();
        LineMetadata {
            version: SCHEMA_VERSION.to_string(),
            created: now,
            modified: now,
        }
    }
}

/// Field selector for [`LineConfig::update_process`].
///
/// Tagged enum rather than a stringly-typed field name, so the compiler
/// rules out misspelled fields and the value carries its own type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "field", content = "value")]
pub enum ProcessUpdate {
    /// Replace the free-text description
    Description(String),
    /// Replace the cycle time in seconds (must be finite and non-negative)
    CycleTime(f64),
}

/// The editable production-line model.
///
/// Single-writer, in-memory: every edit runs to completion before the next
/// one, so no locking discipline is needed. Edits that reference a missing
/// station or process either no-op (removals) or return a not-found error
/// (additions and updates); parameter and cycle-time values are validated
/// at this boundary so the calculator never sees invalid data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    /// Configuration metadata (version, timestamps)
    pub meta: LineMetadata,

    /// Working hours per day (> 0)
    pub working_hours: f64,

    /// Daily demand in units per day (> 0)
    pub daily_demand: f64,

    /// Stations in line order
    pub stations: Vec<Station>,
}

impl LineConfig {
    /// Create an empty configuration with default parameters and no stations.
    pub fn new() -> Self {
        LineConfig {
            meta: LineMetadata::now(),
            working_hours: DEFAULT_WORKING_HOURS,
            daily_demand: DEFAULT_DAILY_DEMAND,
            stations: Vec::new(),
        }
    }

    /// The fixed starter configuration: two stations, three processes,
    /// 8-hour day, 480 units/day.
    ///
    /// Station 1 carries Assembly (45 s) and Quality Check (15 s);
    /// Station 2 carries Packaging (30 s). UUIDs are freshly generated on
    /// each call; everything else is deterministic.
    pub fn starter() -> Self {
        let mut line = LineConfig::new();
        line.stations = vec![
            Station::new(
                "Station 1",
                vec![
                    Process::new("Assembly", 45.0),
                    Process::new("Quality Check", 15.0),
                ],
            ),
            Station::new("Station 2", vec![Process::new("Packaging", 30.0)]),
        ];
        line
    }

    /// Replace the entire configuration with the starter configuration.
    pub fn reset_to_defaults(&mut self) {
        *self = LineConfig::starter();
    }

    /// Append a new station with one default process.
    ///
    /// The station is named from its display position at creation time
    /// ("Station N"); identity rests on the returned UUID, not the name.
    /// Returns the new station's ID so a consumer can focus or expand it.
    pub fn add_station(&mut self) -> Uuid {
        let name = format!("Station {}", self.stations.len() + 1);
        let station = Station::new(name, vec![Process::default_new()]);
        let id = station.id;
        self.stations.push(station);
        self.touch();
        id
    }

    /// Remove a station and, with it, all of its processes.
    ///
    /// Returns the removed station, or `None` if the ID is absent
    /// (idempotent no-op).
    pub fn remove_station(&mut self, station_id: &Uuid) -> Option<Station> {
        let index = self.stations.iter().position(|s| &s.id == station_id)?;
        let station = self.stations.remove(index);
        self.touch();
        Some(station)
    }

    /// Append a default process to the named station.
    ///
    /// Returns the new process's ID, or `StationNotFound`.
    pub fn add_process(&mut self, station_id: &Uuid) -> BalanceResult<Uuid> {
        let station = self
            .stations
            .iter_mut()
            .find(|s| &s.id == station_id)
            .ok_or(BalanceError::StationNotFound {
                station_id: *station_id,
            })?;
        let process = Process::default_new();
        let id = process.id;
        station.processes.push(process);
        self.touch();
        Ok(id)
    }

    /// Remove the named process from the named station.
    ///
    /// Returns the removed process, or `None` if either ID is absent
    /// (idempotent no-op).
    pub fn remove_process(&mut self, station_id: &Uuid, process_id: &Uuid) -> Option<Process> {
        let station = self.stations.iter_mut().find(|s| &s.id == station_id)?;
        let index = station.processes.iter().position(|p| &p.id == process_id)?;
        let process = station.processes.remove(index);
        self.touch();
        Some(process)
    }

    /// Set a process's description or cycle time.
    ///
    /// Cycle-time values that are negative, NaN, or infinite are rejected
    /// with `InvalidInput` and leave the process unchanged.
    pub fn update_process(
        &mut self,
        station_id: &Uuid,
        process_id: &Uuid,
        update: ProcessUpdate,
    ) -> BalanceResult<()> {
        if let ProcessUpdate::CycleTime(value) = update {
            if !value.is_finite() || value < 0.0 {
                return Err(BalanceError::invalid_input(
                    "cycle_time_s",
                    value.to_string(),
                    "Cycle time must be a finite, non-negative number of seconds",
                ));
            }
        }

        let station = self
            .stations
            .iter_mut()
            .find(|s| &s.id == station_id)
            .ok_or(BalanceError::StationNotFound {
                station_id: *station_id,
            })?;
        let process = station
            .processes
            .iter_mut()
            .find(|p| &p.id == process_id)
            .ok_or(BalanceError::ProcessNotFound {
                station_id: *station_id,
                process_id: *process_id,
            })?;

        match update {
            ProcessUpdate::Description(description) => process.description = description,
            ProcessUpdate::CycleTime(value) => process.cycle_time_s = value,
        }
        self.touch();
        Ok(())
    }

    /// Set the working hours per day. Must be finite and positive.
    pub fn set_working_hours(&mut self, hours: f64) -> BalanceResult<()> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(BalanceError::invalid_input(
                "working_hours",
                hours.to_string(),
                "Working hours must be a finite, positive number",
            ));
        }
        self.working_hours = hours;
        self.touch();
        Ok(())
    }

    /// Set the daily demand in units per day. Must be finite and positive.
    pub fn set_daily_demand(&mut self, units_per_day: f64) -> BalanceResult<()> {
        if !units_per_day.is_finite() || units_per_day <= 0.0 {
            return Err(BalanceError::invalid_input(
                "daily_demand",
                units_per_day.to_string(),
                "Daily demand must be a finite, positive number of units",
            ));
        }
        self.daily_demand = units_per_day;
        self.touch();
        Ok(())
    }

    /// Get a station by ID.
    pub fn get_station(&self, station_id: &Uuid) -> Option<&Station> {
        self.stations.iter().find(|s| &s.id == station_id)
    }

    /// Number of stations on the line.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        LineConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_configuration() {
        let line = LineConfig::starter();
        assert_eq!(line.working_hours, 8.0);
        assert_eq!(line.daily_demand, 480.0);
        assert_eq!(line.station_count(), 2);
        assert_eq!(line.stations[0].processes.len(), 2);
        assert_eq!(line.stations[1].processes.len(), 1);
        assert_eq!(line.stations[0].total_cycle_time_s(), 60.0);
        assert_eq!(line.stations[1].total_cycle_time_s(), 30.0);
        assert_eq!(line.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_add_station_appends_with_default_process() {
        let mut line = LineConfig::starter();
        let id = line.add_station();

        assert_eq!(line.station_count(), 3);
        let station = line.get_station(&id).unwrap();
        assert_eq!(station.name, "Station 3");
        assert_eq!(station.processes.len(), 1);
        assert_eq!(station.processes[0].description, DEFAULT_PROCESS_DESCRIPTION);
        assert_eq!(station.processes[0].cycle_time_s, DEFAULT_PROCESS_CYCLE_TIME_S);
    }

    #[test]
    fn test_remove_station_cascades_and_is_idempotent() {
        let mut line = LineConfig::starter();
        let id = line.stations[0].id;
        let process_ids: Vec<Uuid> = line.stations[0].processes.iter().map(|p| p.id).collect();

        let removed = line.remove_station(&id).unwrap();
        assert_eq!(removed.processes.len(), 2);
        assert_eq!(line.station_count(), 1);

        // No process of the removed station remains reachable
        for pid in &process_ids {
            let found = line
                .stations
                .iter()
                .flat_map(|s| s.processes.iter())
                .any(|p| &p.id == pid);
            assert!(!found);
        }

        // Second removal is a no-op
        assert!(line.remove_station(&id).is_none());
        assert_eq!(line.station_count(), 1);
    }

    #[test]
    fn test_ids_stay_unique_after_delete_and_re_add() {
        let mut line = LineConfig::starter();
        let first = line.add_station();
        line.remove_station(&first);
        let second = line.add_station();

        assert_ne!(first, second);
        let mut ids: Vec<Uuid> = line.stations.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), line.station_count());
    }

    #[test]
    fn test_add_process() {
        let mut line = LineConfig::starter();
        let station_id = line.stations[1].id;

        let pid = line.add_process(&station_id).unwrap();
        let station = line.get_station(&station_id).unwrap();
        assert_eq!(station.processes.len(), 2);
        assert_eq!(station.processes[1].id, pid);
    }

    #[test]
    fn test_add_process_unknown_station() {
        let mut line = LineConfig::starter();
        let err = line.add_process(&Uuid::new_v4()).unwrap_err();
        assert_eq!(err.error_code(), "STATION_NOT_FOUND");
    }

    #[test]
    fn test_remove_process_is_idempotent() {
        let mut line = LineConfig::starter();
        let station_id = line.stations[0].id;
        let process_id = line.stations[0].processes[0].id;

        assert!(line.remove_process(&station_id, &process_id).is_some());
        assert!(line.remove_process(&station_id, &process_id).is_none());
        assert_eq!(line.stations[0].processes.len(), 1);
    }

    #[test]
    fn test_update_process_description_and_cycle_time() {
        let mut line = LineConfig::starter();
        let station_id = line.stations[0].id;
        let process_id = line.stations[0].processes[0].id;

        line.update_process(
            &station_id,
            &process_id,
            ProcessUpdate::Description("Torque check".to_string()),
        )
        .unwrap();
        line.update_process(&station_id, &process_id, ProcessUpdate::CycleTime(52.5))
            .unwrap();

        let process = &line.get_station(&station_id).unwrap().processes[0];
        assert_eq!(process.description, "Torque check");
        assert_eq!(process.cycle_time_s, 52.5);
    }

    #[test]
    fn test_update_process_rejects_bad_cycle_times() {
        let mut line = LineConfig::starter();
        let station_id = line.stations[0].id;
        let process_id = line.stations[0].processes[0].id;

        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = line
                .update_process(&station_id, &process_id, ProcessUpdate::CycleTime(bad))
                .unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
        // Original value untouched
        assert_eq!(line.stations[0].processes[0].cycle_time_s, 45.0);
    }

    #[test]
    fn test_parameter_setters_validate() {
        let mut line = LineConfig::starter();

        line.set_working_hours(7.5).unwrap();
        line.set_daily_demand(600.0).unwrap();
        assert_eq!(line.working_hours, 7.5);
        assert_eq!(line.daily_demand, 600.0);

        assert!(line.set_working_hours(0.0).is_err());
        assert!(line.set_working_hours(f64::NAN).is_err());
        assert!(line.set_daily_demand(-480.0).is_err());
        assert!(line.set_daily_demand(f64::INFINITY).is_err());

        // Failed sets leave the values alone
        assert_eq!(line.working_hours, 7.5);
        assert_eq!(line.daily_demand, 600.0);
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut line = LineConfig::starter();
        line.add_station();
        line.set_daily_demand(1000.0).unwrap();

        line.reset_to_defaults();
        assert_eq!(line.station_count(), 2);
        assert_eq!(line.daily_demand, 480.0);
        assert_eq!(line.working_hours, 8.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let line = LineConfig::starter();
        let json = serde_json::to_string_pretty(&line).unwrap();
        assert!(json.contains("Assembly"));
        assert!(json.contains("Packaging"));

        let roundtrip: LineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.station_count(), 2);
        assert_eq!(roundtrip.stations[0].id, line.stations[0].id);
        assert_eq!(roundtrip.stations[0].total_cycle_time_s(), 60.0);
    }

    #[test]
    fn test_empty_station_cycle_time_is_zero() {
        let station = Station::new("Empty", vec![]);
        assert_eq!(station.total_cycle_time_s(), 0.0);
    }
}
