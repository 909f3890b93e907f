#![forbid(unsafe_code)]

//! Multi-line message formatting.
//!
//! Splits a message on explicit line breaks, preserves intentional blank
//! lines, and wraps each non-blank segment with the Unicode-aware policy
//! ([`crate::wrap::wrap_by_width`]). The output line order equals the
//! order lines are sent to the printer.

use crate::budget::ColumnBudget;
use crate::error::LayoutError;
use crate::wrap::wrap_by_width;

/// Format `message` into the ordered sequence of printable lines.
///
/// The whole message is trimmed first; if nothing visible remains the
/// request is rejected with [`LayoutError::EmptyMessage`]. The trimmed
/// message is then split on `'\n'` without collapsing consecutive
/// breaks: a blank segment becomes exactly one empty line, and every
/// other segment is wrapped to the budget, in order.
///
/// # Example
/// ```
/// use tapeform_text::{ColumnBudget, format_message};
///
/// let budget = ColumnBudget::new(27)?;
/// let lines = format_message("water garden\n\nfeed cat", budget)?;
/// assert_eq!(lines, vec!["water garden", "", "feed cat"]);
/// # Ok::<(), tapeform_text::LayoutError>(())
/// ```
///
/// # Errors
/// Returns [`LayoutError::EmptyMessage`] when the trimmed message is
/// empty.
pub fn format_message(message: &str, budget: ColumnBudget) -> Result<Vec<String>, LayoutError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(LayoutError::EmptyMessage);
    }

    let mut lines = Vec::new();
    let mut segments = 0usize;

    for segment in message.split('\n') {
        segments += 1;
        let segment = segment.trim();
        if segment.is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(wrap_by_width(segment, budget));
    }

    tracing::trace!(segments, lines = lines.len(), %budget, "formatted message");

    Ok(lines)
}
