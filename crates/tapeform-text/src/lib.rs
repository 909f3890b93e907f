#![forbid(unsafe_code)]

//! Text layout for fixed-column receipt and label printers.
//!
//! A receipt printer renders a fixed grid of display columns per line
//! (27 on the target device). This crate turns arbitrary Unicode input
//! into lines that fit that grid:
//!
//! - [`width`] classifies each code point's column cost (most glyphs 1,
//!   East-Asian wide glyphs 2, controls 0, tab 4).
//! - [`narrow`] folds full-width presentation forms to their halfwidth
//!   counterparts before anything is measured.
//! - [`wrap`] packs code points (or whitespace-delimited words) greedily
//!   into lines that never exceed a [`ColumnBudget`].
//! - [`message`] splits a multi-line message on explicit line breaks,
//!   preserves intentional blank lines, and wraps each segment.
//!
//! The pipeline is purely functional: no shared state, no I/O, safe to
//! call from any thread with zero setup.
//!
//! # Example
//! ```
//! use tapeform_text::{ColumnBudget, format_message};
//!
//! let budget = ColumnBudget::new(27)?;
//! let lines = format_message("Dry cleaning", budget)?;
//! assert_eq!(lines, vec!["Dry cleaning"]);
//! # Ok::<(), tapeform_text::LayoutError>(())
//! ```

pub mod budget;
pub mod error;
pub mod message;
pub mod narrow;
pub mod width;
pub mod wrap;

pub use budget::ColumnBudget;
pub use error::LayoutError;
pub use message::format_message;
pub use narrow::to_narrow;
pub use width::{char_columns, text_columns};
pub use wrap::{wrap_by_width, wrap_by_word_length};
