//! Cell resolution.

use crate::error::CellError;
use crate::format::FormatSpec;
use crate::fragment::Fragment;
use crate::model::Value;

/// What a single (record, column) pair resolves to before it is displayed.
///
/// - `Custom`: the column has a template; its output is used as is.
/// - `Formatted`: the column has a format specifier.
/// - `Plain`: neither; the value's default string conversion is used.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Formatted(Value, FormatSpec),
    Custom(Fragment),
    Plain(Value),
}

/// Display-ready cell content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Fragment(Fragment),
}

impl CellContent {
    /// Text content with any markup stripped.
    pub fn to_plain_text(&self) -> String {
        match self {
            CellContent::Text(text) => text.clone(),
            CellContent::Fragment(fragment) => fragment.to_plain_text(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            CellContent::Text(text) => crate::fragment::escape_html(text),
            CellContent::Fragment(fragment) => fragment.to_html(),
        }
    }
}

impl Cell {
    /// Resolve to display content. `column` is only used to label errors.
    pub fn resolve(self, column: &str) -> Result<CellContent, CellError> {
        match self {
            Cell::Custom(fragment) => Ok(CellContent::Fragment(fragment)),
            Cell::Formatted(value, spec) => spec
                .apply(&value)
                .map(CellContent::Text)
                .map_err(|e| CellError::new(column, e)),
            Cell::Plain(value) => Ok(CellContent::Text(value.to_string())),
        }
    }
}
