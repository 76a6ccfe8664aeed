//! Console rendering: one colored line per diff record.
//!
//! Colors come from `colored`, which honors `NO_COLOR`/`CLICOLOR` and any
//! override set by the caller.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use jsondiff_core::{DiffKind, DiffRecord, JsonDiff};
use serde::{Deserialize, Serialize};

/// Console reporting options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Hide `same` records on the console. They are still exported.
    pub silent: bool,
}

/// Render a single record as its console line.
pub fn render_record(record: &DiffRecord) -> ColoredString {
    let field = &record.field;
    match record.kind {
        DiffKind::Same => format!("✅ Same: {field}").green(),
        DiffKind::Changed if record.type_mismatch => format!("🟡 Changed (type): {field}").yellow(),
        DiffKind::Changed => format!("🟡 Changed: {field}").yellow(),
        DiffKind::Removed => format!("🔻 Removed: {field}").red(),
        DiffKind::Added => format!("🔺 Added: {field}").cyan(),
    }
}

/// One-line tally of the record set.
pub fn summary_line(diff: &JsonDiff) -> String {
    format!(
        "{} added, {} removed, {} changed, {} unchanged",
        diff.additions(),
        diff.removals(),
        diff.modifications(),
        diff.unchanged()
    )
}

/// Write every visible record, in order, followed by the summary.
pub fn write_report<W: Write>(
    out: &mut W,
    diff: &JsonDiff,
    options: &ReportOptions,
) -> io::Result<()> {
    for record in diff {
        if options.silent && record.kind == DiffKind::Same {
            continue;
        }
        writeln!(out, "{}", render_record(record))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", summary_line(diff).bold())?;
    Ok(())
}
