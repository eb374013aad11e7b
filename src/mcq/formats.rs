//! Round-trip serialization back into spreadsheet form
//!
//! Cells are joined with tabs, rows with newlines. Records can be
//! serialized with or without the header row prepended; callers pick the
//! variant the receiving tool expects.

use super::record::{McqRecord, HEADERS};
use super::rows::RawRow;

/// Whether serialized records start with the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Data rows only
    Omit,
    /// Header row first, then data rows
    #[default]
    Prepend,
}

/// Serialize raw rows as tab-delimited text (the unconverted preview
/// payload).
pub fn rows_to_tsv(rows: &[RawRow]) -> String {
    rows.iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize records as tab-delimited text in header order.
pub fn records_to_tsv(records: &[McqRecord], header: HeaderMode) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    if header == HeaderMode::Prepend {
        lines.push(HEADERS.join("\t"));
    }
    for record in records {
        lines.push(record.fields().join("\t"));
    }
    lines.join("\n")
}
