//! Configuration error types

use super::FormatError;

/// Errors raised while building a table configuration.
///
/// These are reported once, when the configuration is built, and never
/// while rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A column names a property that has no registered accessor.
    #[error("Column '{column}' does not resolve to a known property")]
    UnknownProperty { column: String },

    /// Two columns read the same property.
    #[error("Column '{column}' is declared more than once")]
    DuplicateProperty { column: String },

    /// A column's format specifier could not be parsed.
    #[error("Column '{column}' has an invalid format '{specifier}': {source}")]
    InvalidFormat {
        column: String,
        specifier: String,
        #[source]
        source: FormatError,
    },
}

impl ConfigError {
    /// Creates a new unknown property error.
    pub fn unknown_property(column: impl Into<String>) -> Self {
        Self::UnknownProperty {
            column: column.into(),
        }
    }

    /// Creates a new duplicate property error.
    pub fn duplicate_property(column: impl Into<String>) -> Self {
        Self::DuplicateProperty {
            column: column.into(),
        }
    }

    /// Creates a new invalid format error.
    pub fn invalid_format(column: impl Into<String>, source: FormatError) -> Self {
        Self::InvalidFormat {
            column: column.into(),
            specifier: source.specifier().to_string(),
            source,
        }
    }

    /// Returns the name of the offending column.
    pub fn column(&self) -> &str {
        match self {
            Self::UnknownProperty { column }
            | Self::DuplicateProperty { column }
            | Self::InvalidFormat { column, .. } => column,
        }
    }
}
