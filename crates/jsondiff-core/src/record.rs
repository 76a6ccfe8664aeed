//! Diff records and the ordered record set returned by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The outcome recorded for a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Present only in the second document.
    Added,
    /// Present only in the first document.
    Removed,
    /// Present in both with different values.
    Changed,
    /// Present in both with equal values.
    Same,
}

impl DiffKind {
    /// Lowercase name, as used in the export schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Added => "added",
            DiffKind::Removed => "removed",
            DiffKind::Changed => "changed",
            DiffKind::Same => "same",
        }
    }

    /// The kind seen when the two documents are swapped.
    pub fn inverse(&self) -> Self {
        match self {
            DiffKind::Added => DiffKind::Removed,
            DiffKind::Removed => DiffKind::Added,
            other => *other,
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field-level outcome, keyed by its dot-joined path from the root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    #[serde(rename = "type")]
    pub kind: DiffKind,
    pub field: String,
    /// Set on `Changed` records where one side is an object and the other
    /// is not. Console-only; never exported.
    #[serde(skip)]
    pub type_mismatch: bool,
}

impl DiffRecord {
    pub fn new(kind: DiffKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            type_mismatch: false,
        }
    }

    pub fn added(field: impl Into<String>) -> Self {
        Self::new(DiffKind::Added, field)
    }

    pub fn removed(field: impl Into<String>) -> Self {
        Self::new(DiffKind::Removed, field)
    }

    pub fn changed(field: impl Into<String>) -> Self {
        Self::new(DiffKind::Changed, field)
    }

    pub fn same(field: impl Into<String>) -> Self {
        Self::new(DiffKind::Same, field)
    }

    /// A `Changed` record caused by an object meeting a non-object.
    pub fn type_changed(field: impl Into<String>) -> Self {
        Self {
            type_mismatch: true,
            ..Self::changed(field)
        }
    }
}

/// The ordered result of comparing two documents.
///
/// Serializes as a bare JSON array of records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonDiff {
    /// Records in emission order.
    pub records: Vec<DiffRecord>,
}

impl JsonDiff {
    /// Create an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no records were produced at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffRecord> {
        self.records.iter()
    }

    /// Number of records of the given kind.
    pub fn count(&self, kind: DiffKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Number of added fields.
    pub fn additions(&self) -> usize {
        self.count(DiffKind::Added)
    }

    /// Number of removed fields.
    pub fn removals(&self) -> usize {
        self.count(DiffKind::Removed)
    }

    /// Number of changed fields.
    pub fn modifications(&self) -> usize {
        self.count(DiffKind::Changed)
    }

    /// Number of unchanged fields.
    pub fn unchanged(&self) -> usize {
        self.count(DiffKind::Same)
    }

    /// Returns `true` if any record is something other than `Same`.
    pub fn has_changes(&self) -> bool {
        self.records.iter().any(|r| r.kind != DiffKind::Same)
    }
}

impl<'a> IntoIterator for &'a JsonDiff {
    type Item = &'a DiffRecord;
    type IntoIter = std::slice::Iter<'a, DiffRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
