//! The 11-field MCQ record schema
//!
//! Field order maps positionally onto raw row cells. The free-text fields
//! (question, options, correct answer, rationale) run through the escaping
//! engine during construction; the trailing metadata fields (slug, tags,
//! difficulty, points) pass through untouched.

use serde::{Deserialize, Serialize};

use super::escape::escape_cell;
use super::rows::RawRow;

/// Number of fields in the record schema
pub const FIELD_COUNT: usize = 11;

/// Column headers, in serialization order
pub const HEADERS: [&str; FIELD_COUNT] = [
    "Question",
    "Option A",
    "Option B",
    "Option C",
    "Option D",
    "Correct Answer",
    "Correct Answer Rationale",
    "Slug",
    "Tags",
    "Difficulty",
    "Points",
];

/// One converted question row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqRecord {
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
    pub rationale: String,
    pub slug: String,
    pub tags: String,
    pub difficulty: String,
    pub points: String,
}

impl McqRecord {
    /// Build a record from one raw row.
    ///
    /// Cells map positionally: missing cells become empty fields and extra
    /// cells are dropped, so any row converts regardless of arity.
    pub fn from_row(row: &RawRow) -> Self {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
        McqRecord {
            question: escape_cell(cell(0)),
            option_a: escape_cell(cell(1)),
            option_b: escape_cell(cell(2)),
            option_c: escape_cell(cell(3)),
            option_d: escape_cell(cell(4)),
            correct_answer: escape_cell(cell(5)),
            rationale: escape_cell(cell(6)),
            slug: cell(7).to_string(),
            tags: cell(8).to_string(),
            difficulty: cell(9).to_string(),
            points: cell(10).to_string(),
        }
    }

    /// Convert every raw row; the output length always equals the input
    /// length.
    pub fn from_rows(rows: &[RawRow]) -> Vec<McqRecord> {
        rows.iter().map(McqRecord::from_row).collect()
    }

    /// Field values in header order, for serialization.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.question,
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
            &self.correct_answer,
            &self.rationale,
            &self.slug,
            &self.tags,
            &self.difficulty,
            &self.points,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_header_count_matches_schema() {
        assert_eq!(HEADERS.len(), FIELD_COUNT);
    }

    #[test]
    fn test_full_row_maps_positionally() {
        let record = McqRecord::from_row(&row(&[
            "What is 2+2?",
            "3",
            "4",
            "5",
            "6",
            "4",
            "Basic math",
            "q1",
            "math",
            "easy",
            "1",
        ]));
        assert_eq!(record.question, "What is 2+2?");
        assert_eq!(record.option_b, "4");
        assert_eq!(record.correct_answer, "4");
        assert_eq!(record.rationale, "Basic math");
        assert_eq!(record.slug, "q1");
        assert_eq!(record.points, "1");
    }

    #[test]
    fn test_missing_cells_default_to_empty() {
        let record = McqRecord::from_row(&row(&["only a question"]));
        assert_eq!(record.question, "only a question");
        assert_eq!(record.option_a, "");
        assert_eq!(record.points, "");
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let mut cells = vec!["x".to_string(); 14];
        cells[10] = "5".to_string();
        let record = McqRecord::from_row(&cells);
        assert_eq!(record.points, "5");
        assert_eq!(record.fields().len(), FIELD_COUNT);
    }

    #[test]
    fn test_free_text_fields_are_escaped() {
        let record = McqRecord::from_row(&row(&[
            "Pick the (right) tag",
            "<div>",
            "{span}",
            "[a]",
            "(b)",
            "<div>",
            "Because (reasons)",
            "html-(basics)",
            "tags(raw)",
            "easy",
            "1",
        ]));
        assert_eq!(record.question, "Pick the `(right)` tag");
        assert_eq!(record.option_a, "`<div>`");
        assert_eq!(record.option_b, "`{span}`");
        assert_eq!(record.correct_answer, "`<div>`");
        assert_eq!(record.rationale, "Because `(reasons)`");
        // Metadata fields pass through untouched
        assert_eq!(record.slug, "html-(basics)");
        assert_eq!(record.tags, "tags(raw)");
    }

    #[test]
    fn test_record_count_equals_row_count() {
        let rows = vec![row(&["a"]), row(&["b"]), vec![]];
        assert_eq!(McqRecord::from_rows(&rows).len(), 3);
    }
}
