//! Reporting for json-diff results.
//!
//! Consumes a [`jsondiff_core::JsonDiff`] produced by the engine: renders one
//! colored line per record for the console and writes the full record set
//! to a file on request.
//!
//! # Key Types
//!
//! - [`ReportOptions`] -- console settings (silent mode)
//! - [`render_record`] / [`write_report`] -- colored console output
//! - [`export_json`] -- pretty-printed JSON array export
//! - [`ReportError`] -- export write and serialization failures

pub mod console;
pub mod error;
pub mod export;

pub use console::{render_record, summary_line, write_report, ReportOptions};
pub use error::{ReportError, ReportResult};
pub use export::{export_json, to_json};
