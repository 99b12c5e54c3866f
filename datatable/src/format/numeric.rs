//! Standard numeric format specifiers.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::error::FormatError;
use crate::model::Value;

const CURRENCY_SYMBOL: &str = "$";
const DEFAULT_PRECISION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericKind {
    Currency,
    Number,
    Fixed,
    Integer,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct NumericFormat {
    kind: NumericKind,
    precision: Option<u32>,
}

impl NumericFormat {
    /// Parses `<letter>[digits]`. Returns `None` if the string has any
    /// other shape, so the caller can try it as a date pattern.
    pub(super) fn parse(specifier: &str) -> Option<Self> {
        let mut chars = specifier.chars();
        let kind = match chars.next()?.to_ascii_uppercase() {
            'C' => NumericKind::Currency,
            'N' => NumericKind::Number,
            'F' => NumericKind::Fixed,
            'D' => NumericKind::Integer,
            'P' => NumericKind::Percent,
            _ => return None,
        };
        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else if digits.len() <= 2 && digits.bytes().all(|b| b.is_ascii_digit()) {
            let precision: u32 = digits.parse().ok()?;
            // Decimal cannot carry more than 28 fractional digits
            if precision > 28 && kind != NumericKind::Integer {
                return None;
            }
            Some(precision)
        } else {
            return None;
        };
        Some(Self { kind, precision })
    }

    pub(super) fn apply(&self, specifier: &str, value: &Value) -> Result<String, FormatError> {
        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        match self.kind {
            NumericKind::Currency => {
                let (negative, digits) = fixed(decimal(specifier, value)?, precision, true);
                let sign = if negative { "-" } else { "" };
                Ok(format!("{sign}{CURRENCY_SYMBOL}{digits}"))
            }
            NumericKind::Number => Ok(signed(fixed(decimal(specifier, value)?, precision, true))),
            NumericKind::Fixed => Ok(signed(fixed(decimal(specifier, value)?, precision, false))),
            NumericKind::Percent => {
                let scaled = decimal(specifier, value)?
                    .checked_mul(Decimal::ONE_HUNDRED)
                    .ok_or_else(|| FormatError::out_of_range(specifier, value.type_name()))?;
                Ok(format!("{}%", signed(fixed(scaled, precision, true))))
            }
            NumericKind::Integer => {
                let n = value
                    .as_integer()
                    .ok_or_else(|| FormatError::incompatible(specifier, value.type_name()))?;
                let width = self.precision.unwrap_or(0) as usize;
                let sign = if n < 0 { "-" } else { "" };
                Ok(format!("{sign}{:0width$}", n.unsigned_abs()))
            }
        }
    }
}

/// The value as a decimal. Floats outside the decimal range are reported
/// as out of range rather than as the wrong type.
fn decimal(specifier: &str, value: &Value) -> Result<Decimal, FormatError> {
    match (value.as_decimal(), value) {
        (Some(d), _) => Ok(d),
        (None, Value::Float(_)) => Err(FormatError::out_of_range(specifier, value.type_name())),
        (None, _) => Err(FormatError::incompatible(specifier, value.type_name())),
    }
}

fn signed((negative, digits): (bool, String)) -> String {
    if negative { format!("-{digits}") } else { digits }
}

/// Rounds to `precision` fractional digits and renders the magnitude.
///
/// Returns whether the rounded value is negative; a value that rounds to
/// zero is never negative. The fraction always has exactly `precision`
/// digits, even when the decimal cannot carry that scale.
fn fixed(value: Decimal, precision: u32, grouped: bool) -> (bool, String) {
    let mut rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(precision);

    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = if grouped {
        group_thousands(int_part)
    } else {
        int_part.to_string()
    };
    if precision > 0 {
        let frac_part = frac_part.unwrap_or("");
        out.push('.');
        out.push_str(frac_part);
        // rescale caps the scale once the integer part is large
        for _ in frac_part.len()..precision as usize {
            out.push('0');
        }
    }
    (negative, out)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
