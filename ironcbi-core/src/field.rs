//! Fixed-width field encoders.
//!
//! [`FieldKind`] is the catalog of type-specific encoders. Each kind formats a
//! [`FieldValue`] into exactly `width` characters or fails with an
//! [`Error`](crate::Error). The alphanumeric kind is the single exception to
//! the fail-on-oversize contract: text that still exceeds the width after
//! transliteration is truncated, and the truncation is reported through a
//! `tracing` warning rather than an error.

use crate::error::{Error, Result};
use crate::value::FieldValue;
use deunicode::deunicode;
use rust_decimal::Decimal;
use tracing::warn;

/// Date rendering variants used by different CBI record families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Eight characters, `DDMMYYYY`; null renders as `00000000`.
    DayMonthYear4,
    /// Six characters, `DDMMYY`; null renders as spaces.
    DayMonthYear2,
}

impl DateStyle {
    /// Returns the exact field width required by this style.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            Self::DayMonthYear4 => 8,
            Self::DayMonthYear2 => 6,
        }
    }
}

/// The catalog of fixed-width field encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// ASCII-transliterated free text, left-justified, silently truncated.
    Alphanumeric,
    /// Right-justified integer; null renders as spaces.
    Numeric,
    /// Fixed-point value scaled by `10^fractional_digits` and rounded to an
    /// integer; null renders as zero.
    Decimal {
        /// Digits before the implied decimal point.
        integer_digits: u8,
        /// Digits after the implied decimal point.
        fractional_digits: u8,
    },
    /// Calendar date in one of the two CBI renderings.
    Date(DateStyle),
    /// Single `S`/`N` character.
    Boolean,
}

impl FieldKind {
    /// Returns a short name for the kind, used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Alphanumeric => "alphanumeric",
            Self::Numeric => "numeric",
            Self::Decimal { .. } => "decimal",
            Self::Date(_) => "date",
            Self::Boolean => "boolean",
        }
    }

    /// Returns the exact width this kind requires, if it mandates one.
    ///
    /// Date and boolean fields have a fixed width contract that is checked at
    /// schema definition time; the other kinds accept any width.
    #[must_use]
    pub const fn required_width(&self) -> Option<usize> {
        match self {
            Self::Date(style) => Some(style.width()),
            Self::Boolean => Some(1),
            _ => None,
        }
    }

    /// Returns the implicit default value for this kind.
    #[must_use]
    pub const fn default_value(&self) -> FieldValue {
        match self {
            Self::Boolean => FieldValue::Flag(false),
            _ => FieldValue::Empty,
        }
    }

    /// Formats `value` into exactly `width` characters.
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] if the value's type is not accepted by
    /// this kind, or [`Error::WidthOverflow`] if the rendering cannot fit the
    /// declared width. Oversized alphanumeric text does not error; it is
    /// truncated to `width`.
    pub fn format(&self, value: &FieldValue, width: usize) -> Result<String> {
        let rendered = match self {
            Self::Alphanumeric => return format_alphanumeric(value, width),
            Self::Numeric => format_numeric(value, width)?,
            Self::Decimal {
                fractional_digits, ..
            } => format_decimal(value, width, *fractional_digits)?,
            Self::Date(style) => format_date(value, *style)?,
            Self::Boolean => format_boolean(value)?,
        };
        if rendered.chars().count() != width {
            return Err(Error::WidthOverflow { width, rendered });
        }
        Ok(rendered)
    }

    fn mismatch(&self, value: &FieldValue) -> Error {
        Error::TypeMismatch {
            kind: self.name(),
            value_type: value.type_name(),
        }
    }
}

/// Transliterates, strips line breaks, left-justifies, and truncates.
///
/// CR+LF pairs collapse to a single `" / "` separator, matching the CBI
/// convention for multi-line remittance text.
fn format_alphanumeric(value: &FieldValue, width: usize) -> Result<String> {
    let text = match value {
        FieldValue::Empty => String::new(),
        FieldValue::Text(s) => deunicode(s),
        other => return Err(FieldKind::Alphanumeric.mismatch(other)),
    };
    let mut out = format!(
        "{:<width$}",
        text.trim().replace("\r\n", "\n").replace('\n', " / ")
    );
    if out.len() > width {
        warn!(width, rendered = out.len(), "oversized alphanumeric value truncated");
        out.truncate(width);
    }
    Ok(out)
}

fn format_numeric(value: &FieldValue, width: usize) -> Result<String> {
    match value {
        FieldValue::Empty => Ok(" ".repeat(width)),
        FieldValue::Integer(n) => Ok(format!("{n:>width$}")),
        other => Err(FieldKind::Numeric.mismatch(other)),
    }
}

fn format_decimal(value: &FieldValue, width: usize, fractional_digits: u8) -> Result<String> {
    let amount = match value {
        FieldValue::Empty => Decimal::ZERO,
        FieldValue::Integer(n) => Decimal::from(*n),
        FieldValue::Amount(d) => *d,
        other => {
            return Err(Error::TypeMismatch {
                kind: "decimal",
                value_type: other.type_name(),
            });
        }
    };
    let mut scaled = amount;
    for _ in 0..fractional_digits {
        scaled = scaled
            .checked_mul(Decimal::TEN)
            .ok_or_else(|| Error::WidthOverflow {
                width,
                rendered: amount.to_string(),
            })?;
    }
    // Bankers rounding, as mandated for CBI amount fields.
    Ok(format!("{:>width$}", scaled.round().to_string()))
}

fn format_date(value: &FieldValue, style: DateStyle) -> Result<String> {
    match (value, style) {
        (FieldValue::Empty, DateStyle::DayMonthYear4) => Ok("00000000".to_string()),
        (FieldValue::Empty, DateStyle::DayMonthYear2) => Ok(" ".repeat(6)),
        (FieldValue::Date(d), DateStyle::DayMonthYear4) => Ok(d.format("%d%m%Y").to_string()),
        (FieldValue::Date(d), DateStyle::DayMonthYear2) => Ok(d.format("%d%m%y").to_string()),
        (other, _) => Err(FieldKind::Date(style).mismatch(other)),
    }
}

fn format_boolean(value: &FieldValue) -> Result<String> {
    match value {
        FieldValue::Flag(true) => Ok("S".to_string()),
        FieldValue::Flag(false) | FieldValue::Empty => Ok("N".to_string()),
        other => Err(FieldKind::Boolean.mismatch(other)),
    }
}
