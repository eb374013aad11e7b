//! Write-only system clipboard sink
//!
//! The pipeline treats the clipboard as an external collaborator: it
//! receives a finished payload and the core never reads the outcome back.
//! Binaries decide whether a failure is worth a status line.

use arboard::Clipboard;

/// Place text on the system clipboard.
///
/// Returns the error for callers that want to surface it; the conversion
/// pipeline itself never depends on the result.
pub fn set_text(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())
}
