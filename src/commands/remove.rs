// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Remove command - delete an employee record by PC Number
//!
//! Deletion is idempotent: removing an absent key succeeds and says so.

use crate::store::RosterStore;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the remove command
pub fn run(data_dir: &Path, pc: &str) -> Result<()> {
    let mut store = RosterStore::load(data_dir)
        .with_context(|| format!("Failed to load roster from {}", data_dir.display()))?;

    let removed = store.remove(pc);
    store.save(data_dir)?;

    if removed {
        println!("Removed employee '{pc}'");
    } else {
        println!("No employee with PC Number '{pc}'");
    }

    Ok(())
}
