//! Row splitting for pasted spreadsheet text
//!
//! Input arrives as one freeform block: newline-separated rows with cells
//! separated by tabs or, when pasted from sources that flatten tabs, runs
//! of two or more spaces. Tabs win when present; the space fallback drops
//! empty cells so aligned columns don't produce phantom fields.

use once_cell::sync::Lazy;
use regex::Regex;

/// One input line split into trimmed cells
pub type RawRow = Vec<String>;

/// Runs of two or more spaces, the cell separator for tab-less lines
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("space-run pattern"));

/// Split the full pasted block into rows of cells.
///
/// Returns `None` when the input is empty after trimming; otherwise one
/// `RawRow` per line of the trimmed block. Any string input succeeds.
pub fn split_rows(input: &str) -> Option<Vec<RawRow>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split('\n').map(split_line).collect())
}

/// Split one line into trimmed cells.
///
/// Tabs take precedence: a line containing any tab splits exactly on tabs,
/// with empty cells preserved so column positions hold. Otherwise the line
/// splits on 2+-space runs and empty cells are dropped.
fn split_line(line: &str) -> RawRow {
    let tab_cells: Vec<&str> = line.split('\t').collect();
    if tab_cells.len() > 1 {
        return tab_cells
            .into_iter()
            .map(|cell| cell.trim().to_string())
            .collect();
    }
    SPACE_RUN
        .split(line)
        .filter(|cell| !cell.trim().is_empty())
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Whether a row's cell count matches the expected schema arity.
///
/// Advisory only: conversion never rejects a row, this just flags it for
/// visual attention in the preview.
pub fn is_valid_row(row: &[String], expected_fields: usize) -> bool {
    row.len() == expected_fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(row: &[&str]) -> RawRow {
        row.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert_eq!(split_rows(""), None);
        assert_eq!(split_rows("   \n  \n"), None);
    }

    #[test]
    fn test_one_row_per_line() {
        let rows = split_rows("a\tb\nc\td\ne\tf").unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_tab_split_preserves_empty_cells() {
        let rows = split_rows("a\t\tb").unwrap();
        assert_eq!(rows[0], cells(&["a", "", "b"]));
    }

    #[test]
    fn test_tabs_win_over_space_runs() {
        // The multi-space run inside the first cell must not split it
        let rows = split_rows("a  b\tc").unwrap();
        assert_eq!(rows[0], cells(&["a  b", "c"]));
    }

    #[test]
    fn test_space_run_split_drops_empty_cells() {
        let rows = split_rows("alpha   beta  gamma").unwrap();
        assert_eq!(rows[0], cells(&["alpha", "beta", "gamma"]));
    }

    #[test]
    fn test_single_space_does_not_split() {
        let rows = split_rows("one two  three").unwrap();
        assert_eq!(rows[0], cells(&["one two", "three"]));
    }

    #[test]
    fn test_cells_are_trimmed() {
        let rows = split_rows("  a \t b \t c  ").unwrap();
        assert_eq!(rows[0], cells(&["a", "b", "c"]));
    }

    #[test]
    fn test_blank_interior_line_becomes_empty_row() {
        let rows = split_rows("a\tb\n\nc\td").unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_empty());
    }

    #[test]
    fn test_trailing_newline_adds_no_row() {
        let rows = split_rows("a\tb\n").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_row_validity() {
        let row = cells(&["a", "b", "c"]);
        assert!(is_valid_row(&row, 3));
        assert!(!is_valid_row(&row, 11));
        assert!(!is_valid_row(&[], 3));
    }
}
