#![forbid(unsafe_code)]

//! Greedy line wrapping under a fixed column budget.
//!
//! Two interchangeable policies with the same external contract
//! (`(text, budget) -> lines`):
//!
//! - [`wrap_by_width`] packs individual code points by display width
//!   after narrow normalization. This is the Unicode-safe default used
//!   for printed messages.
//! - [`wrap_by_word_length`] packs whitespace-delimited words by byte
//!   length. Simpler and intended for input known to be single-column.
//!
//! Neither policy ever splits a multi-column glyph: a single code point
//! wider than the budget is placed alone on its own line.
//!
//! # Example
//! ```
//! use tapeform_text::{ColumnBudget, wrap_by_width};
//!
//! let budget = ColumnBudget::new(27)?;
//! assert_eq!(wrap_by_width("Dry cleaning", budget), vec!["Dry cleaning"]);
//! # Ok::<(), tapeform_text::LayoutError>(())
//! ```

use crate::budget::ColumnBudget;
use crate::narrow::to_narrow;
use crate::width::char_columns;

/// Wrap `text` into lines of at most `budget` display columns,
/// accumulating one normalized code point at a time.
///
/// The input is narrow-normalized first, then scanned once: when the
/// next code point would overflow a line that already has width, the
/// line is closed (whitespace-trimmed) and a fresh one started. The code
/// point is always placed, so a glyph wider than the whole budget still
/// lands alone rather than being split. Empty input yields a single
/// empty line.
#[must_use]
pub fn wrap_by_width(text: &str, budget: ColumnBudget) -> Vec<String> {
    let max = budget.columns();
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for c in to_narrow(text).chars() {
        let cost = char_columns(c);

        if current_width + cost > max && current_width > 0 {
            lines.push(current.trim().to_string());
            current.clear();
            current_width = 0;
        }

        current.push(c);
        current_width += cost;
    }

    if !current.is_empty() {
        lines.push(current.trim().to_string());
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Wrap `text` into lines of at most `budget` bytes, packing
/// whitespace-delimited words greedily with a single joining space.
///
/// Length is measured in raw bytes, not display columns, so this policy
/// is only budget-accurate for single-column input. A word longer than
/// the budget occupies a line by itself, unsplit. Empty input yields a
/// single empty line.
#[must_use]
pub fn wrap_by_word_length(text: &str, budget: ColumnBudget) -> Vec<String> {
    let max = budget.columns();
    let mut words = text.split_whitespace();

    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();

    for word in words {
        if current.len() + 1 + word.len() <= max {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
