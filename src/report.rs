// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Report builder - renders filtered roster data as CSV text or a
//! paginated PDF
//!
//! Both renderers consume exactly what the store's filter operations
//! return. Reports are produced on demand as byte buffers for download;
//! nothing is persisted here.

use crate::types::{EmployeeRecord, SubDivisionSummary};
use anyhow::{anyhow, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

/// Default download name for the CSV report.
pub const CSV_REPORT_NAME: &str = "filtered_employee_data.csv";
/// Default download name for the PDF report.
pub const PDF_REPORT_NAME: &str = "staff_report.pdf";

// A4 portrait, all measures in mm
const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_H: f32 = 6.0;

// Fixed column layout for the employee table: x offset and character
// budget per cell. Overflowing text is cut, never wrapped.
const COLUMNS: [(f32, usize); 5] = [
    (MARGIN, 14),         // PC Number
    (MARGIN + 30.0, 26),  // Name
    (MARGIN + 85.0, 18),  // Station
    (MARGIN + 125.0, 11), // Date
    (MARGIN + 150.0, 14), // Attachments
];

/// Render employee records as UTF-8 CSV bytes: a header row, then one
/// line per record, RFC-4180 quoting. Parsing the output with the same
/// format reconstructs the records exactly, including an empty set.
///
/// # Errors
///
/// Returns an error only if CSV encoding itself fails.
pub fn to_csv(records: &[EmployeeRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(EmployeeRecord::HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow!("failed to finish CSV report: {e}"))
}

/// Render a paginated PDF: centered title, one "label: value" line per
/// summary row, then the employee table with a bold header row and fixed
/// column widths. A new page starts whenever the cursor runs off the
/// bottom. Zero summary rows renders the title straight into the table;
/// zero employee rows renders the header row only.
///
/// # Errors
///
/// Returns an error if PDF assembly fails.
pub fn to_pdf(
    records: &[EmployeeRecord],
    summary: &[SubDivisionSummary],
    title: &str,
) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W.into()), Mm(PAGE_H.into()), "roster");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("failed to load PDF font: {e}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow!("failed to load PDF font: {e}"))?;

    let mut cursor = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_H - MARGIN - LINE_H,
    };

    // Centered title. Width estimate is good enough for builtin Helvetica.
    let title_w = text_width_mm(title, 16.0);
    let title_x = ((PAGE_W - title_w) / 2.0).max(MARGIN);
    cursor
        .layer
        .use_text(title, 16.0, Mm(title_x.into()), Mm(cursor.y.into()), &bold);
    cursor.y -= 2.0 * LINE_H;

    for row in summary {
        cursor.advance(&doc);
        cursor.layer.use_text(
            format!(
                "{}: sanctioned {}, actual {}, vacancies {}",
                row.sub_division, row.sanctioned_quota, row.actual_strength, row.vacancies
            ),
            10.0,
            Mm(MARGIN.into()),
            Mm(cursor.y.into()),
            &regular,
        );
        cursor.y -= LINE_H;
    }
    if !summary.is_empty() {
        cursor.y -= LINE_H;
    }

    cursor.advance(&doc);
    for (header, (x, width)) in EmployeeRecord::HEADERS.iter().zip(COLUMNS) {
        cursor.layer.use_text(
            clip(header, width),
            10.0,
            Mm(x.into()),
            Mm(cursor.y.into()),
            &bold,
        );
    }
    cursor.y -= LINE_H;

    for record in records {
        cursor.advance(&doc);
        let cells = [
            record.pc_number.as_str(),
            record.name.as_str(),
            record.station.as_str(),
            record.date.as_str(),
            record.attachment.as_str(),
        ];
        for (cell, (x, width)) in cells.iter().zip(COLUMNS) {
            cursor.layer.use_text(
                clip(cell, width),
                9.0,
                Mm(x.into()),
                Mm(cursor.y.into()),
                &regular,
            );
        }
        cursor.y -= LINE_H;
    }

    drop(cursor);
    doc.save_to_bytes()
        .map_err(|e| anyhow!("failed to serialize PDF report: {e}"))
}

/// Write position on the current page.
struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor {
    /// Start a fresh page when the next line would fall below the margin.
    fn advance(&mut self, doc: &PdfDocumentReference) {
        if self.y < MARGIN {
            let (page, layer) = doc.add_page(Mm(PAGE_W.into()), Mm(PAGE_H.into()), "roster");
            self.layer = doc.get_page(page).get_layer(layer);
            self.y = PAGE_H - MARGIN - LINE_H;
        }
    }
}

/// Rough Helvetica width of `text` at `size` points, in mm.
fn text_width_mm(text: &str, size: f32) -> f32 {
    // Average glyph width of ~0.5 em; 1 pt = 0.3528 mm.
    text.chars().count() as f32 * size * 0.5 * 0.3528
}

/// Cut a cell to its character budget. No ellipsis, matching the
/// source's no-wrap behavior.
fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
