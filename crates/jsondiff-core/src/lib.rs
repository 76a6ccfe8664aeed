//! Diff engine for JSON documents.
//!
//! Walks two parsed JSON objects side by side and produces an ordered set
//! of per-field records. Diffing is a pure function: nothing is printed and
//! no state outlives the returned [`JsonDiff`].
//!
//! # Key Types
//!
//! - [`Document`] -- a parsed JSON object (the root of every input)
//! - [`DiffKind`] / [`DiffRecord`] -- one field-level outcome
//! - [`JsonDiff`] -- the ordered record set for one comparison run
//! - [`json_eq`] -- deep value equality used for leaf comparison

pub mod diff;
pub mod record;

pub use diff::{diff_documents, json_eq, Document};
pub use record::{DiffKind, DiffRecord, JsonDiff};
