#![forbid(unsafe_code)]

//! Display-column classification for single code points.
//!
//! The printer renders a fixed cell grid, so every code point has a
//! defined column cost under a total classification: no error case, no
//! "unknown" bucket. Classification runs on *normalized* code points
//! (see [`crate::narrow`]); full-width presentation forms are folded to
//! their halfwidth counterparts before they reach this function.
//!
//! # Example
//! ```
//! use tapeform_text::char_columns;
//!
//! assert_eq!(char_columns('a'), 1);
//! assert_eq!(char_columns('字'), 2);
//! assert_eq!(char_columns('\t'), 4);
//! ```

use unicode_width::UnicodeWidthChar;

/// Fixed cost charged for a horizontal tab.
///
/// A flat approximation, not true tab-stop alignment: the device has no
/// tab stops, so a constant advance keeps measurement deterministic.
pub const TAB_COLUMNS: usize = 4;

/// Display-column cost of one code point.
///
/// Rules in priority order: tab charges [`TAB_COLUMNS`]; line feeds and
/// all other control code points charge 0; East-Asian wide glyphs
/// charge 2; everything else charges 1.
///
/// Line breaks never reach the wrapper mid-line (the message formatter
/// consumes them first), but the classification stays total so callers
/// can measure arbitrary text.
#[must_use]
pub fn char_columns(c: char) -> usize {
    match c {
        '\t' => TAB_COLUMNS,
        '\n' => 0,
        c if c.is_control() => 0,
        c if c.width() == Some(2) => 2,
        _ => 1,
    }
}

/// Cumulative display width of a string, in columns.
#[must_use]
pub fn text_columns(text: &str) -> usize {
    text.chars().map(char_columns).sum()
}
