// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - renders the filtered roster as a downloadable report

use crate::report;
use crate::store::RosterStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated text
    Csv,
    /// Paginated PDF document
    Pdf,
}

impl ExportFormat {
    /// Parse format from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Default output file name for this format
    #[must_use]
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Csv => report::CSV_REPORT_NAME,
            Self::Pdf => report::PDF_REPORT_NAME,
        }
    }
}

/// Run the export command
pub fn run(
    data_dir: &std::path::Path,
    format: &str,
    output: Option<PathBuf>,
    pc: Option<&str>,
    station: Option<&str>,
    title: &str,
) -> Result<()> {
    let export_format = ExportFormat::parse(format)
        .ok_or_else(|| anyhow::anyhow!("Unknown export format: {}. Supported: csv, pdf", format))?;

    let store = RosterStore::load(data_dir)
        .with_context(|| format!("Failed to load roster from {}", data_dir.display()))?;

    let records = store.filter_employees(pc, station);
    if records.is_empty() {
        eprintln!("Warning: no employee records match the filters.");
    }
    info!(records = records.len(), "exporting roster report");

    let bytes = match export_format {
        ExportFormat::Csv => report::to_csv(&records)?,
        ExportFormat::Pdf => {
            let summary = store.aggregate_by_sub_division();
            report::to_pdf(&records, &summary, title)?
        }
    };

    let path = output.unwrap_or_else(|| PathBuf::from(export_format.default_name()));
    fs::write(&path, &bytes).with_context(|| format!("Failed to write to {}", path.display()))?;
    println!("Exported {} records to {}", records.len(), path.display());

    Ok(())
}
