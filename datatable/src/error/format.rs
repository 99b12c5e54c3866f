//! FormatError for format specifiers

/// Error type for parsing and applying format specifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The specifier is neither a standard numeric format nor a date pattern.
    #[error("Unknown format specifier '{specifier}'")]
    UnknownSpecifier { specifier: String },

    /// A date pattern contains a letter that is not a known date token.
    #[error("Invalid date pattern '{specifier}': unexpected '{token}'")]
    InvalidPattern { specifier: String, token: char },

    /// A quoted literal in a date pattern is never closed.
    #[error("Invalid date pattern '{specifier}': unterminated literal")]
    UnterminatedLiteral { specifier: String },

    /// The specifier parsed but cannot be applied to the value's type.
    #[error("Format '{specifier}' cannot be applied to a {value_type} value")]
    Incompatible {
        specifier: String,
        value_type: &'static str,
    },

    /// The value's type fits the specifier but its magnitude cannot be
    /// represented by the formatter.
    #[error("Value of type {value_type} is out of range for format '{specifier}'")]
    OutOfRange {
        specifier: String,
        value_type: &'static str,
    },
}

impl FormatError {
    /// Creates a new unknown specifier error.
    pub fn unknown(specifier: impl Into<String>) -> Self {
        Self::UnknownSpecifier {
            specifier: specifier.into(),
        }
    }

    /// Creates a new incompatible value error.
    pub fn incompatible(specifier: impl Into<String>, value_type: &'static str) -> Self {
        Self::Incompatible {
            specifier: specifier.into(),
            value_type,
        }
    }

    /// Creates a new out of range error.
    pub fn out_of_range(specifier: impl Into<String>, value_type: &'static str) -> Self {
        Self::OutOfRange {
            specifier: specifier.into(),
            value_type,
        }
    }

    /// Returns the specifier this error refers to.
    pub fn specifier(&self) -> &str {
        match self {
            Self::UnknownSpecifier { specifier }
            | Self::InvalidPattern { specifier, .. }
            | Self::UnterminatedLiteral { specifier }
            | Self::Incompatible { specifier, .. }
            | Self::OutOfRange { specifier, .. } => specifier,
        }
    }
}
