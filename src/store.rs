// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Roster store - CSV-backed employee and station collections
//!
//! The store owns both collections in memory with explicit `load`/`save`
//! boundaries. Stations are read-only reference data; every employee
//! mutation rewrites the whole employee file (write-to-temp then rename,
//! nothing stronger). Last writer wins across processes; there is no lock.

use crate::types::{EmployeeRecord, StationRecord, SubDivisionSummary, EMPLOYEE_FILE, STATION_FILE};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the roster store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A backing file is missing or its columns do not match the schema.
    /// Fatal for the current interaction; nothing was loaded.
    #[error("roster storage unavailable: {path}: {detail}")]
    StorageUnavailable {
        /// Path of the offending file
        path: String,
        /// What went wrong reading or decoding it
        detail: String,
    },
    /// Writing the employee file back failed. The in-memory collection is
    /// NOT rolled back, so memory and storage may now diverge.
    #[error("failed to persist employee roster: {path}: {detail}")]
    Persist {
        /// Path of the file that could not be written
        path: String,
        /// Underlying write or encode failure
        detail: String,
    },
}

/// Station filter selectors, applied in priority order
/// Station > Circle > Sub-Division; the first selected one wins and the
/// rest are ignored. "All", the empty string, and `None` all mean
/// "not selected".
#[derive(Debug, Clone, Default)]
pub struct StationFilter {
    /// Exact station name
    pub station: Option<String>,
    /// Exact circle name
    pub circle: Option<String>,
    /// Exact sub-division name
    pub sub_division: Option<String>,
}

/// Normalize a selector value: `None`, `""`, and `"All"` mean unselected.
fn selected(value: Option<&str>) -> Option<&str> {
    match value {
        Some(v) if !v.is_empty() && v != "All" => Some(v),
        _ => None,
    }
}

/// The roster store: both collections plus the filter, aggregation, and
/// mutation operations over them.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    /// Station quota rows, in file order
    pub stations: Vec<StationRecord>,
    /// Employee rows, in file order
    pub employees: Vec<EmployeeRecord>,
}

impl RosterStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both collections from `station_data.csv` and `employee_data.csv`
    /// inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] if either file is missing
    /// or a row cannot be decoded against the expected columns.
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        let stations = read_collection::<StationRecord>(&dir.join(STATION_FILE))?;
        let employees = read_collection::<EmployeeRecord>(&dir.join(EMPLOYEE_FILE))?;
        debug!(
            stations = stations.len(),
            employees = employees.len(),
            "loaded roster"
        );
        Ok(Self { stations, employees })
    }

    /// Persist the employee collection back to `employee_data.csv` in `dir`.
    ///
    /// The full collection is rewritten on every call: encode to a buffer,
    /// write a sibling temp file, rename it over the target. The station
    /// file is never written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persist`] if encoding or any filesystem step
    /// fails; in-memory state is left as-is.
    pub fn save(&self, dir: &Path) -> Result<(), StoreError> {
        let path = dir.join(EMPLOYEE_FILE);
        let persist = |detail: String| StoreError::Persist {
            path: path.display().to_string(),
            detail,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(EmployeeRecord::HEADERS)
            .map_err(|e| persist(e.to_string()))?;
        for record in &self.employees {
            writer
                .serialize(record)
                .map_err(|e| persist(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| persist(e.to_string()))?;

        let tmp = dir.join(format!("{EMPLOYEE_FILE}.tmp"));
        fs::write(&tmp, &bytes).map_err(|e| persist(e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| persist(e.to_string()))?;
        debug!(employees = self.employees.len(), path = %path.display(), "persisted roster");
        Ok(())
    }

    /// Filter employees by an optional case-insensitive PC Number substring
    /// and an optional exact station match. Both filters are independent;
    /// row order is preserved; no match is an empty result, never an error.
    #[must_use]
    pub fn filter_employees(
        &self,
        pc_substring: Option<&str>,
        station: Option<&str>,
    ) -> Vec<EmployeeRecord> {
        let needle = selected(pc_substring).map(str::to_lowercase);
        let station = selected(station);

        self.employees
            .iter()
            .filter(|e| {
                needle
                    .as_deref()
                    .map_or(true, |n| e.pc_number.to_lowercase().contains(n))
            })
            .filter(|e| station.map_or(true, |s| e.station == s))
            .cloned()
            .collect()
    }

    /// Filter stations by the first selected dimension of `filter`
    /// (Station, then Circle, then Sub-Division). With nothing selected the
    /// whole collection is returned.
    #[must_use]
    pub fn filter_stations(&self, filter: &StationFilter) -> Vec<StationRecord> {
        let pred: Box<dyn Fn(&StationRecord) -> bool> =
            if let Some(s) = selected(filter.station.as_deref()) {
                let s = s.to_string();
                Box::new(move |r| r.station == s)
            } else if let Some(c) = selected(filter.circle.as_deref()) {
                let c = c.to_string();
                Box::new(move |r| r.circle == c)
            } else if let Some(sd) = selected(filter.sub_division.as_deref()) {
                let sd = sd.to_string();
                Box::new(move |r| r.sub_division == sd)
            } else {
                Box::new(|_| true)
            };

        self.stations.iter().filter(|r| pred(r)).cloned().collect()
    }

    /// Group stations by Sub-Division and sum the three quota columns.
    /// Output order is first-seen, which makes the result deterministic for
    /// a given file.
    #[must_use]
    pub fn aggregate_by_sub_division(&self) -> Vec<SubDivisionSummary> {
        let mut rows: Vec<SubDivisionSummary> = Vec::new();
        for station in &self.stations {
            let idx = match rows
                .iter()
                .position(|r| r.sub_division == station.sub_division)
            {
                Some(i) => i,
                None => {
                    rows.push(SubDivisionSummary {
                        sub_division: station.sub_division.clone(),
                        sanctioned_quota: 0,
                        actual_strength: 0,
                        vacancies: 0,
                    });
                    rows.len() - 1
                }
            };
            rows[idx].sanctioned_quota += u64::from(station.sanctioned_quota);
            rows[idx].actual_strength += u64::from(station.actual_strength);
            rows[idx].vacancies += station.vacancies;
        }
        rows
    }

    /// Insert-or-replace keyed by PC Number: every existing row with the
    /// same key is dropped, then the new row is appended. Returns `true`
    /// when an existing row was replaced.
    ///
    /// Only the in-memory collection changes; call [`RosterStore::save`] to
    /// commit.
    pub fn upsert(&mut self, record: EmployeeRecord) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.pc_number != record.pc_number);
        let replaced = self.employees.len() < before;
        self.employees.push(record);
        replaced
    }

    /// Remove every row with the given PC Number. Idempotent: removing an
    /// absent key is not an error. Returns `true` when something was
    /// removed.
    pub fn remove(&mut self, pc_number: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.pc_number != pc_number);
        self.employees.len() < before
    }

    /// Distinct station names from the station file, sorted. This is the
    /// value set offered for the Station filter and the add form.
    #[must_use]
    pub fn station_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.stations.iter().map(|s| s.station.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Whether a station name exists in the station file. Referential
    /// integrity of `EmployeeRecord::station` is not enforced; callers may
    /// warn on a miss.
    #[must_use]
    pub fn knows_station(&self, name: &str) -> bool {
        self.stations.iter().any(|s| s.station == name)
    }

    /// Check if both collections are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty() && self.employees.is_empty()
    }
}

/// Read one CSV collection, mapping every failure to `StorageUnavailable`.
fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let unavailable = |detail: String| StoreError::StorageUnavailable {
        path: path.display().to_string(),
        detail,
    };

    let file = fs::File::open(path).map_err(|e| unavailable(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);
    reader
        .deserialize::<T>()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| unavailable(e.to_string()))
}
