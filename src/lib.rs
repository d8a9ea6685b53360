// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Musterbook library - roster store and report engine
//!
//! This crate provides the core functionality for maintaining a station
//! staff roster backed by flat CSV files: filterable employee and station
//! collections, upsert/delete with whole-file write-back, a Sub-Division
//! aggregation, and CSV/PDF report rendering.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod report;
pub mod store;

/// Core data types matching the backing CSV file schemas
pub mod types {
    use serde::{Deserialize, Serialize};

    /// File name of the station quota collection inside the data directory.
    pub const STATION_FILE: &str = "station_data.csv";
    /// File name of the employee collection inside the data directory.
    pub const EMPLOYEE_FILE: &str = "employee_data.csv";

    // =========================================================================
    // Station Quotas
    // =========================================================================

    /// One row of the station quota file.
    ///
    /// Read-only reference data: there is no write path for this collection.
    /// `vacancies` is stored exactly as read and never recomputed from
    /// `sanctioned_quota - actual_strength`, so a stale count in the source
    /// file survives unchanged.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct StationRecord {
        /// Station name, unique within the file
        #[serde(rename = "Station")]
        pub station: String,
        /// Circle the station belongs to
        #[serde(rename = "Circle")]
        pub circle: String,
        /// Sub-Division the station belongs to
        #[serde(rename = "Sub-Division")]
        pub sub_division: String,
        /// Sanctioned posts for this station
        #[serde(rename = "Sanctioned Quota")]
        pub sanctioned_quota: u32,
        /// Posts currently filled
        #[serde(rename = "Actual Strength")]
        pub actual_strength: u32,
        /// Open posts as recorded in the source file
        #[serde(rename = "Vacancies")]
        pub vacancies: i64,
    }

    // =========================================================================
    // Employees
    // =========================================================================

    /// One row of the employee file.
    ///
    /// `pc_number` is the primary key: searches fold case, storage preserves
    /// it. `station` is a free-text reference into the station file, not
    /// validated. `date` is free-form "DD.MM.YY" text, never parsed.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EmployeeRecord {
        /// Personnel/constable number, the unique key
        #[serde(rename = "PC Number")]
        pub pc_number: String,
        /// Employee name
        #[serde(rename = "Name")]
        pub name: String,
        /// Posted station
        #[serde(rename = "Station")]
        pub station: String,
        /// Posting date as free-form text
        #[serde(rename = "Date")]
        pub date: String,
        /// Attachment note
        #[serde(rename = "Attachments")]
        pub attachment: String,
    }

    impl EmployeeRecord {
        /// Column headers of the employee file, in storage order.
        pub const HEADERS: [&'static str; 5] =
            ["PC Number", "Name", "Station", "Date", "Attachments"];
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// One output row of the Sub-Division aggregation: quota columns summed
    /// over every station in the group.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SubDivisionSummary {
        /// The Sub-Division this row aggregates
        #[serde(rename = "Sub-Division")]
        pub sub_division: String,
        /// Sum of sanctioned posts across the group
        #[serde(rename = "Sanctioned Quota")]
        pub sanctioned_quota: u64,
        /// Sum of filled posts across the group
        #[serde(rename = "Actual Strength")]
        pub actual_strength: u64,
        /// Sum of recorded vacancies across the group
        #[serde(rename = "Vacancies")]
        pub vacancies: i64,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
