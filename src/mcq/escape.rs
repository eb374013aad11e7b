//! Backtick escaping for bracketed spans
//!
//! Downstream spreadsheet tooling treats `<>`, `{}`, `[]` and `()` spans
//! as markup, so every complete span gets wrapped in a pair of backtick
//! markers. The scan is a single left-to-right pass that tracks whether it
//! is inside an existing marker pair; content already wrapped is copied
//! verbatim, which makes the rewrite idempotent and keeps it from wrapping
//! across marker boundaries.
//!
//! Span detection is per bracket type: while scanning a `(` candidate,
//! same-type opens and closes adjust a nesting depth and every other
//! character passes through uncounted. A candidate that runs into a marker
//! or the end of the text before balancing is abandoned; only its opening
//! bracket is emitted, and scanning resumes one position later so a valid
//! span further along is still found.

/// The marker character wrapped around escaped spans
pub const MARKER: char = '`';

/// Recognized opening/closing bracket pairs
const BRACKET_PAIRS: [(char, char); 4] = [('<', '>'), ('{', '}'), ('[', ']'), ('(', ')')];

fn closing_for(open: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|&&(o, _)| o == open)
        .map(|&(_, c)| c)
}

fn is_bracket(c: char) -> bool {
    BRACKET_PAIRS.iter().any(|&(o, cl)| c == o || c == cl)
}

/// Wrap every maximal, well-formed, marker-free bracket span in a marker
/// pair, leaving spans already inside markers untouched.
///
/// Total over arbitrary text: malformed spans are emitted unchanged and
/// re-running the function on its own output is a no-op.
pub fn escape_cell(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut inside_marker = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == MARKER {
            inside_marker = !inside_marker;
            out.push(c);
            i += 1;
        } else if inside_marker {
            out.push(c);
            i += 1;
        } else if let Some(close) = closing_for(c) {
            match span_end(&chars, i, c, close) {
                Some(end) => {
                    out.push(MARKER);
                    out.extend(chars[i..=end].iter());
                    out.push(MARKER);
                    i = end + 1;
                }
                None => {
                    // Abandoned candidate: emit the opener alone and rescan
                    // from the next character
                    out.push(c);
                    i += 1;
                }
            }
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

/// Index where the candidate span starting at `start` balances, or `None`
/// when a marker interrupts it or the text ends first.
///
/// Depth counts only the candidate's own bracket type; unbalanced
/// characters of other types pass through without affecting detection.
fn span_end(chars: &[char], start: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &c) in chars.iter().enumerate().skip(start) {
        if c == MARKER {
            return None;
        }
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Whether any recognized bracket character sits outside a marker span.
///
/// Same marker-state scan as [escape_cell], but a predicate rather than a
/// rewrite: used to highlight cells in the preview before the user commits
/// to conversion.
pub fn needs_escaping(text: &str) -> bool {
    let mut inside_marker = false;
    for c in text.chars() {
        if c == MARKER {
            inside_marker = !inside_marker;
        } else if !inside_marker && is_bracket(c) {
            return true;
        }
    }
    false
}
