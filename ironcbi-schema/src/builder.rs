//! Fluent builder for record schemas.
//!
//! Field declarations carry the 1-based position printed in the CBI record
//! documentation. The builder recomputes every offset from the running width
//! cursor and rejects any declaration whose position disagrees with it, so a
//! drifted copy of a record table fails at build time instead of producing
//! misaligned output.

use crate::error::SchemaError;
use crate::schema::{FieldSpec, GroupSpec, RecordSchema, SchemaEntry};
use ironcbi_core::{DateStyle, FieldKind, FieldValue};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Builder for one record type's schema.
///
/// # Example
/// ```
/// use ironcbi_schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new("10")
///     .text(1, "filler", 1)
///     .text_default(2, "record_type", 2, "10")
///     .numeric(4, "prog_number", 7)
///     .build()
///     .unwrap();
/// assert_eq!(schema.total_width(), 10);
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    decls: Vec<Decl>,
}

#[derive(Debug)]
struct Decl {
    position: usize,
    name: String,
    body: DeclBody,
}

#[derive(Debug)]
enum DeclBody {
    Field {
        width: usize,
        kind: FieldKind,
        default: FieldValue,
    },
    Group {
        inner: RecordSchema,
        repetitions: usize,
    },
}

impl SchemaBuilder {
    /// Creates a builder for the given record kind name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decls: Vec::new(),
        }
    }

    fn field(
        mut self,
        position: usize,
        name: impl Into<String>,
        width: usize,
        kind: FieldKind,
        default: FieldValue,
    ) -> Self {
        self.decls.push(Decl {
            position,
            name: name.into(),
            body: DeclBody::Field {
                width,
                kind,
                default,
            },
        });
        self
    }

    /// Declares an alphanumeric field.
    #[must_use]
    pub fn text(self, position: usize, name: impl Into<String>, width: usize) -> Self {
        self.field(
            position,
            name,
            width,
            FieldKind::Alphanumeric,
            FieldValue::Empty,
        )
    }

    /// Declares an alphanumeric field with a default value.
    #[must_use]
    pub fn text_default(
        self,
        position: usize,
        name: impl Into<String>,
        width: usize,
        default: impl Into<FieldValue>,
    ) -> Self {
        self.field(
            position,
            name,
            width,
            FieldKind::Alphanumeric,
            default.into(),
        )
    }

    /// Declares a numeric field.
    #[must_use]
    pub fn numeric(self, position: usize, name: impl Into<String>, width: usize) -> Self {
        self.field(position, name, width, FieldKind::Numeric, FieldValue::Empty)
    }

    /// Declares a numeric field with a default value.
    #[must_use]
    pub fn numeric_default(
        self,
        position: usize,
        name: impl Into<String>,
        width: usize,
        default: impl Into<FieldValue>,
    ) -> Self {
        self.field(position, name, width, FieldKind::Numeric, default.into())
    }

    /// Declares a decimal field with an explicit digit budget.
    ///
    /// `integer_digits + fractional_digits` must equal `width`; the sum is
    /// checked in [`build`](Self::build).
    #[must_use]
    pub fn decimal(
        self,
        position: usize,
        name: impl Into<String>,
        width: usize,
        integer_digits: u8,
        fractional_digits: u8,
    ) -> Self {
        self.field(
            position,
            name,
            width,
            FieldKind::Decimal {
                integer_digits,
                fractional_digits,
            },
            FieldValue::Empty,
        )
    }

    /// Declares a currency amount field: a decimal with two fractional digits,
    /// the CBI convention for euro-cent amounts.
    #[must_use]
    pub fn amount(self, position: usize, name: impl Into<String>, width: usize) -> Self {
        self.decimal(position, name, width, width.saturating_sub(2) as u8, 2)
    }

    /// Declares an eight-character `DDMMYYYY` date field.
    #[must_use]
    pub fn date_long(self, position: usize, name: impl Into<String>, width: usize) -> Self {
        self.field(
            position,
            name,
            width,
            FieldKind::Date(DateStyle::DayMonthYear4),
            FieldValue::Empty,
        )
    }

    /// Declares a six-character `DDMMYY` date field.
    #[must_use]
    pub fn date_short(self, position: usize, name: impl Into<String>, width: usize) -> Self {
        self.field(
            position,
            name,
            width,
            FieldKind::Date(DateStyle::DayMonthYear2),
            FieldValue::Empty,
        )
    }

    /// Declares a single-character `S`/`N` boolean field.
    #[must_use]
    pub fn boolean(self, position: usize, name: impl Into<String>, width: usize) -> Self {
        self.field(
            position,
            name,
            width,
            FieldKind::Boolean,
            FieldValue::Flag(false),
        )
    }

    /// Declares a composite group: `inner` repeated `repetitions` times.
    #[must_use]
    pub fn group(
        mut self,
        position: usize,
        name: impl Into<String>,
        inner: RecordSchema,
        repetitions: usize,
    ) -> Self {
        self.decls.push(Decl {
            position,
            name: name.into(),
            body: DeclBody::Group { inner, repetitions },
        });
        self
    }

    /// Validates the declarations and builds the immutable schema.
    ///
    /// # Errors
    /// Returns a [`SchemaError`] on duplicate names, position drift, digit
    /// budgets that do not match the width, wrong date/boolean widths, zero
    /// group repetitions, or defaults that cannot render at their width.
    pub fn build(self) -> Result<RecordSchema, SchemaError> {
        let record = self.name;
        let mut entries = Vec::with_capacity(self.decls.len());
        let mut entry_map = HashMap::new();
        let mut defaults = Vec::new();
        // 1-based cursor, matching CBI documentation positions.
        let mut cursor = 1usize;
        let mut slot = 0usize;

        for decl in self.decls {
            if entry_map.contains_key(&decl.name) {
                return Err(SchemaError::DuplicateField {
                    record: record.clone(),
                    field: decl.name,
                });
            }
            if decl.position != cursor {
                return Err(SchemaError::PositionMismatch {
                    record: record.clone(),
                    field: decl.name,
                    declared: decl.position,
                    computed: cursor,
                });
            }
            match decl.body {
                DeclBody::Field {
                    width,
                    kind,
                    default,
                } => {
                    if let Some(expected) = kind.required_width()
                        && width != expected
                    {
                        return Err(match kind {
                            FieldKind::Boolean => SchemaError::InvalidBooleanWidth {
                                field: decl.name,
                                actual: width,
                            },
                            _ => SchemaError::InvalidDateWidth {
                                field: decl.name,
                                expected,
                                actual: width,
                            },
                        });
                    }
                    if let FieldKind::Decimal {
                        integer_digits,
                        fractional_digits,
                    } = kind
                        && usize::from(integer_digits) + usize::from(fractional_digits) != width
                    {
                        return Err(SchemaError::InvalidDecimalDigits {
                            field: decl.name,
                            integer_digits,
                            fractional_digits,
                            width,
                        });
                    }
                    let rendered =
                        kind.format(&default, width)
                            .map_err(|source| SchemaError::Default {
                                field: decl.name.clone(),
                                source,
                            })?;
                    defaults.push(rendered);
                    entry_map.insert(decl.name.clone(), entries.len());
                    entries.push(SchemaEntry::Field(FieldSpec {
                        name: decl.name,
                        offset: cursor - 1,
                        width,
                        kind,
                        default,
                        slot,
                    }));
                    cursor += width;
                    slot += 1;
                }
                DeclBody::Group { inner, repetitions } => {
                    if repetitions == 0 {
                        return Err(SchemaError::EmptyGroup {
                            record: record.clone(),
                            group: decl.name,
                        });
                    }
                    for _ in 0..repetitions {
                        defaults.extend_from_slice(inner.defaults());
                    }
                    let spec = GroupSpec {
                        name: decl.name.clone(),
                        inner: Arc::new(inner),
                        repetitions,
                        offset: cursor - 1,
                        slot,
                    };
                    cursor += spec.width();
                    slot += spec.slot_count();
                    entry_map.insert(decl.name, entries.len());
                    entries.push(SchemaEntry::Group(spec));
                }
            }
        }

        let total_width = cursor - 1;
        debug!(record = %record, total_width, slots = slot, "record schema built");
        Ok(RecordSchema::new(
            record,
            entries,
            entry_map,
            total_width,
            slot,
            defaults,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    fn inner_pair() -> RecordSchema {
        SchemaBuilder::new("pair")
            .text(1, "hi", 3)
            .text(4, "earth", 5)
            .build()
            .unwrap()
    }

    #[test]
    fn test_offsets_follow_running_cursor() {
        let schema = SchemaBuilder::new("XX")
            .text(1, "a", 10)
            .text(11, "b", 20)
            .numeric(31, "c", 5)
            .build()
            .unwrap();

        assert_eq!(schema.entry("a").unwrap().offset(), 0);
        assert_eq!(schema.entry("b").unwrap().offset(), 10);
        assert_eq!(schema.entry("c").unwrap().offset(), 30);
        assert_eq!(schema.total_width(), 35);
        assert_eq!(schema.slot_count(), 3);
    }

    #[test]
    fn test_default_buffer_precomputed() {
        let schema = SchemaBuilder::new("XX")
            .text_default(1, "record_type", 2, "PC")
            .numeric_default(3, "method", 1, 1_i64)
            .boolean(4, "flag", 1)
            .build()
            .unwrap();

        assert_eq!(schema.defaults(), &["PC", "1", "N"]);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = SchemaBuilder::new("XX")
            .text(1, "twice", 3)
            .text(4, "twice", 3)
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { .. }));
    }

    #[test]
    fn test_position_drift_rejected() {
        let err = SchemaBuilder::new("XX")
            .text(1, "a", 10)
            .text(12, "b", 5)
            .build()
            .unwrap_err();
        match err {
            SchemaError::PositionMismatch {
                declared, computed, ..
            } => {
                assert_eq!(declared, 12);
                assert_eq!(computed, 11);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decimal_digit_budget_enforced() {
        let err = SchemaBuilder::new("XX")
            .decimal(1, "amt", 13, 10, 2)
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDecimalDigits { .. }));

        let ok = SchemaBuilder::new("XX").decimal(1, "amt", 13, 11, 2).build();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_amount_uses_two_fractional_digits() {
        let schema = SchemaBuilder::new("XX").amount(1, "amt", 15).build().unwrap();
        let SchemaEntry::Field(spec) = schema.entry("amt").unwrap() else {
            panic!("expected field");
        };
        assert_eq!(
            spec.kind,
            ironcbi_core::FieldKind::Decimal {
                integer_digits: 13,
                fractional_digits: 2
            }
        );
    }

    #[test]
    fn test_date_width_enforced() {
        let err = SchemaBuilder::new("XX")
            .date_long(1, "when", 6)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidDateWidth {
                expected: 8,
                actual: 6,
                ..
            }
        ));

        let err = SchemaBuilder::new("XX")
            .date_short(1, "when", 8)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidDateWidth {
                expected: 6,
                actual: 8,
                ..
            }
        ));
    }

    #[test]
    fn test_boolean_width_enforced() {
        let err = SchemaBuilder::new("XX")
            .boolean(1, "flag", 2)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidBooleanWidth { actual: 2, .. }
        ));
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let err = SchemaBuilder::new("XX")
            .group(1, "rep", inner_pair(), 0)
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::EmptyGroup { .. }));
    }

    #[test]
    fn test_oversized_default_rejected() {
        let err = SchemaBuilder::new("XX")
            .numeric_default(1, "n", 3, 12_345_i64)
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::Default { .. }));
    }

    #[test]
    fn test_group_sizes() {
        let schema = SchemaBuilder::new("XX")
            .text(1, "head", 30)
            .group(31, "rep", inner_pair(), 5)
            .text(71, "tail", 8)
            .build()
            .unwrap();

        assert_eq!(schema.total_width(), 78);
        // 1 head + 2 fields x 5 repetitions + 1 tail.
        assert_eq!(schema.slot_count(), 12);
        let SchemaEntry::Group(group) = schema.entry("rep").unwrap() else {
            panic!("expected group");
        };
        assert_eq!(group.width(), 40);
        assert_eq!(group.slot_count(), 10);
        assert_eq!(group.offset, 30);
        assert_eq!(group.slot, 1);
    }

    #[test]
    fn test_group_position_checked_against_cursor() {
        let err = SchemaBuilder::new("XX")
            .text(1, "head", 30)
            .group(32, "rep", inner_pair(), 5)
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::PositionMismatch { .. }));
    }
}
