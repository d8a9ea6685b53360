// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Add command - insert or replace an employee record by PC Number
//!
//! Upsert semantics: every existing row with the same key is dropped and
//! the new row is appended, then the whole employee file is rewritten.
//! Ordering of unrelated rows is preserved; the touched row moves to the
//! end.

use crate::store::RosterStore;
use crate::types::EmployeeRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the add command
pub fn run(
    data_dir: &Path,
    pc: String,
    name: String,
    station: String,
    date: String,
    attachment: String,
) -> Result<()> {
    let mut store = RosterStore::load(data_dir)
        .with_context(|| format!("Failed to load roster from {}", data_dir.display()))?;

    // Station names are not validated against the station file, matching
    // the source. A miss is worth a warning, nothing more.
    if !station.is_empty() && !store.knows_station(&station) {
        eprintln!("Warning: station '{station}' is not in the station file");
    }

    let record = EmployeeRecord { pc_number: pc, name, station, date, attachment };
    let pc = record.pc_number.clone();
    let replaced = store.upsert(record);
    store.save(data_dir)?;

    if replaced {
        println!("Updated employee '{pc}'");
    } else {
        println!("Added employee '{pc}'");
    }

    Ok(())
}
