//! Value enum for dynamic cell values

use std::fmt;

use chrono::Datelike;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Timelike;
use rust_decimal::Decimal;

/// A dynamic value read from a record by a column accessor.
///
/// Accessors return a `Value` so that format specifiers can be applied
/// without knowing the concrete record type.
///
/// # Type Mapping
///
/// | Field kind | Rust Variant |
/// |------------|--------------|
/// | missing / empty | `Null` |
/// | flag | `Bool` |
/// | integer | `Int`, `Long` |
/// | floating point | `Float` |
/// | exact decimal | `Decimal` |
/// | currency | `Money` |
/// | text | `String` |
/// | calendar date | `Date` |
/// | date and time | `DateTime` |
///
/// # Example
///
/// ```
/// use datatable::model::Value;
///
/// let name = Value::from("Jane Smith");
/// let years = Value::from(5i32);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// Currency amount, see [`Money`].
    Money(Money),
    /// String value.
    String(String),
    /// Calendar date without a time.
    Date(NaiveDate),
    /// Date and time without a timezone.
    DateTime(NaiveDateTime),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::Money(_) => "money",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
        }
    }

    /// Returns the value as a decimal if it is numeric.
    ///
    /// Floats that cannot be represented (NaN, infinities) yield `None`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Int(n) => Some(Decimal::from(*n)),
            Value::Long(n) => Some(Decimal::from(*n)),
            Value::Float(n) => Decimal::try_from(*n).ok(),
            Value::Decimal(d) => Some(*d),
            Value::Money(m) => Some(m.amount()),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is integral.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a date-time if it is a date or date-time.
    ///
    /// Dates are widened to midnight.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(d) => Some(d.and_time(chrono::NaiveTime::MIN)),
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// A currency amount.
///
/// Only marks the amount as money for display purposes; the `C` specifier
/// formats any numeric value, and no currency code is carried.
///
/// ```
/// use datatable::model::Money;
/// use datatable::model::Value;
///
/// let salary = Value::from(Money::from_int(62_000));
/// assert_eq!(salary.to_string(), "62000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Whole currency units.
    pub fn from_int(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Default string conversion, used when a column has neither a template
/// nor a format specifier.
///
/// Dates use the `M/d/yyyy` short form; date-times append `h:mm:ss tt`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Money(m) => write!(f, "{m}"),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}/{}/{}", d.month(), d.day(), d.year()),
            Value::DateTime(dt) => {
                let (pm, hour) = dt.hour12();
                write!(
                    f,
                    "{}/{}/{} {}:{:02}:{:02} {}",
                    dt.month(),
                    dt.day(),
                    dt.year(),
                    hour,
                    dt.minute(),
                    dt.second(),
                    if pm { "PM" } else { "AM" }
                )
            }
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<Money> for Value {
    fn from(v: Money) -> Self {
        Value::Money(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
