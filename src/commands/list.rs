// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! List command - the filterable employee table

use crate::store::RosterStore;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the list command
pub fn run(data_dir: &Path, pc: Option<&str>, station: Option<&str>, json: bool) -> Result<()> {
    let store = RosterStore::load(data_dir)
        .with_context(|| format!("Failed to load roster from {}", data_dir.display()))?;

    let records = store.filter_employees(pc, station);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No matching employee records.");
        return Ok(());
    }

    println!("Employee records ({}):", records.len());
    println!(
        "  {:<12} {:<24} {:<18} {:<10} {}",
        "PC Number", "Name", "Station", "Date", "Attachments"
    );
    for record in &records {
        println!(
            "  {:<12} {:<24} {:<18} {:<10} {}",
            record.pc_number, record.name, record.station, record.date, record.attachment
        );
    }

    Ok(())
}
