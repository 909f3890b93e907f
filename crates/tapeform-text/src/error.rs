#![forbid(unsafe_code)]

//! Layout error taxonomy.
//!
//! Both conditions are local and synchronous: the engine reports them to
//! the immediate caller and never logs or retries internally. Once a
//! budget has been validated, classification and wrapping are total over
//! all inputs and cannot fail.

use thiserror::Error;

/// Errors produced by budget validation and message formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The caller supplied a column budget of zero. The engine fails
    /// closed instead of clamping, so a misconfigured device cannot
    /// silently degrade to one glyph per line.
    #[error("column budget must be at least 1 column (got {columns})")]
    InvalidColumnBudget {
        /// The rejected value.
        columns: usize,
    },
    /// The message contains no visible content after trimming. Distinct
    /// from a successful empty result: callers treat this as a rejected
    /// print request, not a no-op.
    #[error("message has no printable content after trimming")]
    EmptyMessage,
}
