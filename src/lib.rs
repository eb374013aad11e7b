//! # mcqtab
//!
//! Converts pasted spreadsheet text (multiple-choice question rows) into a
//! structured record set, wrapping bracketed spans in backtick markers so
//! they survive the round trip through tools that mangle raw punctuation.
//!
//! The pipeline is linear: raw text → row splitting → preview (rows
//! flagged, nothing rewritten) → escaping per cell → records →
//! tab-delimited serialization for copy back into the spreadsheet.

pub mod mcq;
