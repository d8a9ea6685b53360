// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Summary command - quota totals aggregated by Sub-Division

use crate::store::RosterStore;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the summary command
pub fn run(data_dir: &Path, json: bool) -> Result<()> {
    let store = RosterStore::load(data_dir)
        .with_context(|| format!("Failed to load roster from {}", data_dir.display()))?;

    let rows = store.aggregate_by_sub_division();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No station records to aggregate.");
        return Ok(());
    }

    println!("Sub-Division aggregated view ({}):", rows.len());
    println!(
        "  {:<18} {:>10} {:>8} {:>9}",
        "Sub-Division", "Sanctioned", "Actual", "Vacancies"
    );
    for row in &rows {
        println!(
            "  {:<18} {:>10} {:>8} {:>9}",
            row.sub_division, row.sanctioned_quota, row.actual_strength, row.vacancies
        );
    }

    Ok(())
}
