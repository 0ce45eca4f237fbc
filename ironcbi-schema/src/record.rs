//! Mutable record instances bound to a schema.
//!
//! A [`RecordInstance`] owns one formatted string per slot, starting as a copy
//! of the schema's default buffer. Callers overwrite slots field by field and
//! format the record exactly once. Instances are exclusively owned; only the
//! schema behind them is shared.

use crate::error::RecordError;
use crate::schema::{RecordSchema, SchemaEntry};
use ironcbi_core::FieldValue;
use std::sync::Arc;

/// Computes the absolute value-buffer slot of a group subfield.
///
/// `base_slot` is the slot of the group's first repetition's first field,
/// `inner_slot_count` the number of slots one repetition occupies.
#[must_use]
pub const fn group_slot(
    base_slot: usize,
    inner_slot_count: usize,
    repetition: usize,
    inner_slot: usize,
) -> usize {
    base_slot + inner_slot_count * repetition + inner_slot
}

/// A mutable value buffer bound to a [`RecordSchema`].
#[derive(Debug, Clone)]
pub struct RecordInstance {
    schema: Arc<RecordSchema>,
    values: Vec<String>,
}

impl RecordInstance {
    /// Creates an instance initialized with the schema's default buffer.
    #[must_use]
    pub fn new(schema: Arc<RecordSchema>) -> Self {
        let values = schema.defaults().to_vec();
        Self { schema, values }
    }

    /// Returns the schema this instance is bound to.
    #[must_use]
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Encodes `value` into the named scalar field's slot.
    ///
    /// # Errors
    /// Returns [`RecordError::UnknownField`] for an unknown name,
    /// [`RecordError::NotAScalarField`] for a group name, or
    /// [`RecordError::Field`] if the field's encoder rejects the value.
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> Result<(), RecordError> {
        let (slot, formatted) = match self.schema.entry(field) {
            None => {
                return Err(RecordError::UnknownField {
                    record: self.schema.name().to_string(),
                    field: field.to_string(),
                });
            }
            Some(SchemaEntry::Group(_)) => {
                return Err(RecordError::NotAScalarField {
                    record: self.schema.name().to_string(),
                    field: field.to_string(),
                });
            }
            Some(SchemaEntry::Field(spec)) => {
                let formatted = spec.kind.format(&value.into(), spec.width).map_err(
                    |source| RecordError::Field {
                        field: spec.name.clone(),
                        source,
                    },
                )?;
                (spec.slot, formatted)
            }
        };
        self.values[slot] = formatted;
        Ok(())
    }

    /// Returns a write cursor for one repetition of the named group.
    ///
    /// # Errors
    /// Returns [`RecordError::UnknownField`] for an unknown name,
    /// [`RecordError::NotAGroup`] for a scalar field name, or
    /// [`RecordError::IndexOutOfRange`] if `index >= repetitions`.
    pub fn group(&mut self, name: &str, index: usize) -> Result<GroupCursor<'_>, RecordError> {
        let (inner, base_slot, group) = match self.schema.entry(name) {
            None => {
                return Err(RecordError::UnknownField {
                    record: self.schema.name().to_string(),
                    field: name.to_string(),
                });
            }
            Some(SchemaEntry::Field(_)) => {
                return Err(RecordError::NotAGroup {
                    record: self.schema.name().to_string(),
                    field: name.to_string(),
                });
            }
            Some(SchemaEntry::Group(spec)) => {
                if index >= spec.repetitions {
                    return Err(RecordError::IndexOutOfRange {
                        group: spec.name.clone(),
                        index,
                        repetitions: spec.repetitions,
                    });
                }
                (Arc::clone(&spec.inner), spec.slot, spec.name.clone())
            }
        };
        Ok(GroupCursor {
            inner,
            group,
            base_slot,
            index,
            values: &mut self.values,
        })
    }

    /// Concatenates the value buffer into one fixed-width line.
    ///
    /// The total length is carried entirely by the per-field width contracts;
    /// no re-check happens here.
    #[must_use]
    pub fn format(&self) -> String {
        self.values.concat()
    }

    /// Returns a diagnostic dump of the raw slot buffer.
    ///
    /// Never used for production output.
    #[must_use]
    pub fn debug_format(&self) -> String {
        format!("{:?}", self.values)
    }
}

/// Write access to one repetition of a composite group.
#[derive(Debug)]
pub struct GroupCursor<'a> {
    inner: Arc<RecordSchema>,
    group: String,
    base_slot: usize,
    index: usize,
    values: &'a mut Vec<String>,
}

impl GroupCursor<'_> {
    /// Returns the repetition index this cursor writes to.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Encodes `value` into the named subfield of this repetition.
    ///
    /// Writes only the addressed slot; no other repetition or subfield is
    /// touched.
    ///
    /// # Errors
    /// Returns [`RecordError::UnknownField`] for an unknown subfield name,
    /// [`RecordError::NotAScalarField`] if the subfield is itself a group, or
    /// [`RecordError::Field`] if the encoder rejects the value.
    pub fn set(&mut self, subfield: &str, value: impl Into<FieldValue>) -> Result<(), RecordError> {
        let (slot, formatted) = match self.inner.entry(subfield) {
            None => {
                return Err(RecordError::UnknownField {
                    record: self.group.clone(),
                    field: subfield.to_string(),
                });
            }
            Some(SchemaEntry::Group(_)) => {
                return Err(RecordError::NotAScalarField {
                    record: self.group.clone(),
                    field: subfield.to_string(),
                });
            }
            Some(SchemaEntry::Field(spec)) => {
                let formatted = spec.kind.format(&value.into(), spec.width).map_err(
                    |source| RecordError::Field {
                        field: spec.name.clone(),
                        source,
                    },
                )?;
                (
                    group_slot(self.base_slot, self.inner.slot_count(), self.index, spec.slot),
                    formatted,
                )
            }
        };
        self.values[slot] = formatted;
        Ok(())
    }
}
