//! Schema type definitions.
//!
//! A [`RecordSchema`] is the immutable description of one fixed-width record
//! type: an ordered sequence of scalar fields and composite groups with
//! computed character offsets, a total width, and a precomputed default value
//! buffer (one formatted string per slot).

use ironcbi_core::{FieldKind, FieldValue};
use std::collections::HashMap;
use std::sync::Arc;

/// A scalar field within a record schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name, unique within its schema.
    pub name: String,
    /// Zero-based character offset within the record.
    pub offset: usize,
    /// Exact width in characters.
    pub width: usize,
    /// Encoder kind.
    pub kind: FieldKind,
    /// Default value, rendered into the schema's default buffer at build time.
    pub default: FieldValue,
    /// Slot index in the record's value buffer.
    pub slot: usize,
}

/// A composite group: an inner schema repeated a fixed number of times.
#[derive(Debug, Clone)]
pub struct GroupSpec {
    /// Group name, unique within its parent schema.
    pub name: String,
    /// The repeated sub-schema.
    pub inner: Arc<RecordSchema>,
    /// Number of repetitions (always at least one).
    pub repetitions: usize,
    /// Zero-based character offset of the first repetition.
    pub offset: usize,
    /// Slot index of the first repetition's first field.
    pub slot: usize,
}

impl GroupSpec {
    /// Total width occupied by the group: inner width times repetitions.
    #[must_use]
    pub fn width(&self) -> usize {
        self.inner.total_width() * self.repetitions
    }

    /// Total slot count: inner slot count times repetitions.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.inner.slot_count() * self.repetitions
    }
}

/// An ordered entry of a record schema.
#[derive(Debug, Clone)]
pub enum SchemaEntry {
    /// A scalar field.
    Field(FieldSpec),
    /// A composite group.
    Group(GroupSpec),
}

impl SchemaEntry {
    /// Returns the entry's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(f) => &f.name,
            Self::Group(g) => &g.name,
        }
    }

    /// Returns the entry's total width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Field(f) => f.width,
            Self::Group(g) => g.width(),
        }
    }

    /// Returns the number of value-buffer slots the entry occupies.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        match self {
            Self::Field(_) => 1,
            Self::Group(g) => g.slot_count(),
        }
    }

    /// Returns the entry's zero-based character offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Field(f) => f.offset,
            Self::Group(g) => g.offset,
        }
    }
}

/// Immutable schema for one fixed-width record type.
///
/// Built once by [`SchemaBuilder`](crate::SchemaBuilder) at registration time
/// and read-only afterward; safe to share across callers via [`Arc`].
#[derive(Debug, Clone)]
pub struct RecordSchema {
    name: String,
    entries: Vec<SchemaEntry>,
    entry_map: HashMap<String, usize>,
    total_width: usize,
    slot_count: usize,
    defaults: Vec<String>,
}

impl RecordSchema {
    pub(crate) fn new(
        name: String,
        entries: Vec<SchemaEntry>,
        entry_map: HashMap<String, usize>,
        total_width: usize,
        slot_count: usize,
        defaults: Vec<String>,
    ) -> Self {
        debug_assert_eq!(defaults.len(), slot_count);
        Self {
            name,
            entries,
            entry_map,
            total_width,
            slot_count,
            defaults,
        }
    }

    /// Returns the record kind name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered schema entries.
    #[must_use]
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&SchemaEntry> {
        self.entry_map.get(name).map(|&idx| &self.entries[idx])
    }

    /// Returns true if an entry with the given name exists.
    #[must_use]
    pub fn has_entry(&self, name: &str) -> bool {
        self.entry_map.contains_key(name)
    }

    /// Returns the total record width in characters.
    #[must_use]
    pub const fn total_width(&self) -> usize {
        self.total_width
    }

    /// Returns the number of value-buffer slots.
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Returns the precomputed per-slot default strings.
    #[must_use]
    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }
}
