#![forbid(unsafe_code)]

//! Validated per-line column budget.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::LayoutError;

/// Maximum number of display columns a single output line may occupy.
///
/// Always positive: construction rejects zero rather than clamping, so
/// downstream wrapping code never has to re-check the invariant.
///
/// # Example
/// ```
/// use tapeform_text::{ColumnBudget, LayoutError};
///
/// let budget = ColumnBudget::new(27)?;
/// assert_eq!(budget.columns(), 27);
/// assert!(ColumnBudget::new(0).is_err());
/// # Ok::<(), LayoutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnBudget(NonZeroUsize);

impl ColumnBudget {
    /// Create a budget of `columns` display columns.
    ///
    /// Usable in const context, so a device's fixed budget can be a
    /// compile-time constant with the zero check done by const eval.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidColumnBudget`] when `columns` is 0.
    pub const fn new(columns: usize) -> Result<Self, LayoutError> {
        match NonZeroUsize::new(columns) {
            Some(columns) => Ok(Self(columns)),
            None => Err(LayoutError::InvalidColumnBudget { columns }),
        }
    }

    /// The budget in display columns.
    #[must_use]
    pub const fn columns(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for ColumnBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} columns", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_budget_accepted() {
        let budget = ColumnBudget::new(27).unwrap();
        assert_eq!(budget.columns(), 27);
    }

    #[test]
    fn zero_budget_rejected() {
        assert_eq!(
            ColumnBudget::new(0),
            Err(LayoutError::InvalidColumnBudget { columns: 0 })
        );
    }

    #[test]
    fn display_names_unit() {
        let budget = ColumnBudget::new(30).unwrap();
        assert_eq!(budget.to_string(), "30 columns");
    }
}
