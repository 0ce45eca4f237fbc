//! Field value type.
//!
//! [`FieldValue`] is the tagged value accepted by every field setter. The
//! `From` conversions let call sites pass plain Rust values; `Option<T>` maps
//! `None` to [`FieldValue::Empty`], which every encoder renders as its
//! kind-specific null representation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A value to be encoded into a fixed-width field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Absent value; rendered as the kind-specific null representation.
    Empty,
    /// Free text for alphanumeric fields.
    Text(String),
    /// Integer for numeric fields.
    Integer(i64),
    /// Fixed-point amount for decimal fields.
    Amount(Decimal),
    /// Calendar date for date fields.
    Date(NaiveDate),
    /// Boolean flag for S/N fields.
    Flag(bool),
}

impl FieldValue {
    /// Returns a short name for the value's type, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Amount(_) => "amount",
            Self::Date(_) => "date",
            Self::Flag(_) => "flag",
        }
    }

    /// Returns true if the value is [`FieldValue::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<Decimal> for FieldValue {
    fn from(d: Decimal) -> Self {
        Self::Amount(d)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_conversions() {
        assert_eq!(FieldValue::from("abc"), FieldValue::Text("abc".into()));
        assert_eq!(FieldValue::from(42_i64), FieldValue::Integer(42));
        assert_eq!(FieldValue::from(7_i32), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(dec!(1.50)), FieldValue::Amount(dec!(1.50)));
        assert_eq!(FieldValue::from(true), FieldValue::Flag(true));
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<i64> = None;
        assert_eq!(FieldValue::from(none), FieldValue::Empty);
        assert_eq!(FieldValue::from(Some(3_i64)), FieldValue::Integer(3));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(FieldValue::Empty.type_name(), "empty");
        assert_eq!(FieldValue::Integer(1).type_name(), "integer");
        assert_eq!(FieldValue::Flag(false).type_name(), "flag");
    }
}
