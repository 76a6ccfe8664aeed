//! Input loading for json-diff.
//!
//! An input is either an `http://`/`https://` URL, fetched with a plain GET,
//! or a path on the local filesystem. Either way the result must parse as a
//! JSON object at the root.
//!
//! # Key Types
//!
//! - [`Source`] -- URL or filesystem path, classified from the input string
//! - [`Loader`] -- resolves an input to a [`jsondiff_core::Document`]
//! - [`LoadError`] -- fetch, status, read and parse failures

pub mod error;
pub mod loader;

pub use error::{LoadError, LoadResult};
pub use loader::{parse_document, Loader, Source};
