//! Core pipeline for MCQ spreadsheet conversion
//!
//! Modules mirror the pipeline stages:
//! - [rows]: split pasted text into raw rows of cells
//! - [escape]: wrap bracketed spans in backtick markers
//! - [record]: the 11-field record schema and positional construction
//! - [formats]: round-trip serialization back into delimited text
//! - [session]: in-memory state driving the preview/convert/copy actions
//! - [clipboard]: write-only system clipboard sink

pub mod clipboard;
pub mod escape;
pub mod formats;
pub mod record;
pub mod rows;
pub mod session;
