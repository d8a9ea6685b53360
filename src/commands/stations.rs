// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Stations command - the station quota table
//!
//! Selectors apply in priority order Station > Circle > Sub-Division;
//! the first selected one wins.

use crate::store::{RosterStore, StationFilter};
use anyhow::{Context, Result};
use std::path::Path;

/// Run the stations command
pub fn run(
    data_dir: &Path,
    station: Option<String>,
    circle: Option<String>,
    sub_division: Option<String>,
    json: bool,
) -> Result<()> {
    let store = RosterStore::load(data_dir)
        .with_context(|| format!("Failed to load roster from {}", data_dir.display()))?;

    let filter = StationFilter { station, circle, sub_division };
    let rows = store.filter_stations(&filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No matching stations.");
        return Ok(());
    }

    println!("Station quota summary ({}):", rows.len());
    println!(
        "  {:<18} {:<14} {:<14} {:>10} {:>8} {:>9}",
        "Station", "Circle", "Sub-Division", "Sanctioned", "Actual", "Vacancies"
    );
    for row in &rows {
        println!(
            "  {:<18} {:<14} {:<14} {:>10} {:>8} {:>9}",
            row.station,
            row.circle,
            row.sub_division,
            row.sanctioned_quota,
            row.actual_strength,
            row.vacancies
        );
    }

    Ok(())
}
