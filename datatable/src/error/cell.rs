//! Per-cell error types

use std::fmt;

use super::FormatError;

/// Error information for a single cell that could not be resolved.
///
/// A failing cell never aborts the rest of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellError {
    /// The property name of the column the cell belongs to.
    pub column: String,
    /// The underlying formatting failure.
    pub source: FormatError,
}

impl CellError {
    /// Creates a new cell error.
    pub fn new(column: impl Into<String>, source: FormatError) -> Self {
        Self {
            column: column.into(),
            source,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.column, self.source)
    }
}

impl std::error::Error for CellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
