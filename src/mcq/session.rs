//! Session state for one paste-convert-copy cycle
//!
//! The UI's three actions operate on this struct: Preview re-splits the
//! current input, Convert rebuilds the record set from the previewed rows,
//! and the copy accessors serialize whichever stage the user is copying.
//! State is replaced wholesale per action and nothing survives the
//! session.

use super::formats::{self, HeaderMode};
use super::record::{McqRecord, FIELD_COUNT};
use super::rows::{self, RawRow};

/// In-memory state passed between the action handlers
#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    rows: Option<Vec<RawRow>>,
    records: Vec<McqRecord>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Replace the raw input text. Rows and records from the previous
    /// input stay visible until the next Preview.
    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Preview action: re-split the input and discard any previous
    /// records.
    pub fn preview(&mut self) {
        self.rows = rows::split_rows(&self.input);
        self.records.clear();
    }

    /// Convert action: rebuild the record set from the previewed rows.
    /// A no-op before the first Preview.
    pub fn convert(&mut self) {
        if let Some(rows) = &self.rows {
            self.records = McqRecord::from_rows(rows);
        }
    }

    pub fn rows(&self) -> Option<&[RawRow]> {
        self.rows.as_deref()
    }

    pub fn records(&self) -> &[McqRecord] {
        &self.records
    }

    /// Count of previewed rows whose arity doesn't match the schema.
    pub fn invalid_row_count(&self) -> usize {
        self.rows
            .as_deref()
            .map(|rows| {
                rows.iter()
                    .filter(|row| !rows::is_valid_row(row, FIELD_COUNT))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Copy payload for the previewed rows, unescaped. `None` before the
    /// first Preview.
    pub fn rows_payload(&self) -> Option<String> {
        self.rows.as_deref().map(formats::rows_to_tsv)
    }

    /// Copy payload for the converted records. `None` before Convert.
    pub fn records_payload(&self, header: HeaderMode) -> Option<String> {
        if self.records.is_empty() {
            return None;
        }
        Some(formats::records_to_tsv(&self.records, header))
    }
}
