//! Format specifiers
//!
//! A format specifier is a short string that converts a raw [`Value`] into
//! display text. Two families are understood:
//!
//! | Specifier | Meaning | Example |
//! |-----------|---------|---------|
//! | `C[n]` | currency, grouped | `C0` on 50000 → `$50,000` |
//! | `N[n]` | number, grouped | `N2` on 1234.5 → `1,234.50` |
//! | `F[n]` | fixed point | `F1` on 2.25 → `2.3` |
//! | `D[n]` | integer, zero padded | `D3` on 5 → `005` |
//! | `P[n]` | percent | `P0` on 0.5 → `50%` |
//! | date pattern | custom date | `dd-MMM-yyyy` → `10-Sep-2018` |
//!
//! The numeric precision defaults to 2 (`D` defaults to no padding).
//! Midpoints round away from zero.

mod date;
mod numeric;

use std::fmt;
use std::str::FromStr;

use date::DatePattern;
use numeric::NumericFormat;

use crate::error::FormatError;
use crate::model::Value;

/// A parsed format specifier.
///
/// Parsing happens once, when a table configuration is built; applying a
/// parsed specifier can only fail when the value has the wrong type or is
/// too large to represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    specifier: String,
    kind: FormatKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormatKind {
    Numeric(NumericFormat),
    Date(DatePattern),
}

impl FormatSpec {
    /// Parses a specifier string.
    pub fn parse(specifier: &str) -> Result<Self, FormatError> {
        let kind = match NumericFormat::parse(specifier) {
            Some(numeric) => FormatKind::Numeric(numeric),
            None => FormatKind::Date(DatePattern::parse(specifier)?),
        };
        Ok(Self {
            specifier: specifier.to_string(),
            kind,
        })
    }

    /// Returns the specifier string this was parsed from.
    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    /// Converts a value to display text.
    ///
    /// `Null` always formats as the empty string.
    pub fn apply(&self, value: &Value) -> Result<String, FormatError> {
        if value.is_null() {
            return Ok(String::new());
        }
        match &self.kind {
            FormatKind::Numeric(numeric) => numeric.apply(&self.specifier, value),
            FormatKind::Date(pattern) => value
                .as_datetime()
                .map(|dt| pattern.apply(&dt))
                .ok_or_else(|| FormatError::incompatible(&self.specifier, value.type_name())),
        }
    }
}

impl FromStr for FormatSpec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.specifier)
    }
}
