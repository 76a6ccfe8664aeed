use std::io::{self, Write};
use std::process::ExitCode;

use colored::Colorize;
use jsondiff_core::{diff_documents, Document};
use jsondiff_loader::Loader;
use jsondiff_report::{export_json, write_report, ReportOptions};
use tracing::debug;

use crate::cli::Cli;

/// Load both inputs, diff them and report.
///
/// Load and export failures are printed and turn into a failing exit code.
/// Input 2 is never loaded if input 1 fails.
pub async fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let loader = Loader::new()?;

    let Some(left) = load(&loader, &cli.input1).await else {
        return Ok(ExitCode::FAILURE);
    };
    let Some(right) = load(&loader, &cli.input2).await else {
        return Ok(ExitCode::FAILURE);
    };

    println!();
    println!("{}", "🔍 Comparing Responses...".cyan());
    println!();

    let diff = diff_documents(&left, &right);
    debug!(records = diff.len(), changed = diff.has_changes(), "diff computed");

    let options = ReportOptions { silent: cli.silent };
    {
        let mut stdout = io::stdout().lock();
        write_report(&mut stdout, &diff, &options)?;
        stdout.flush()?;
    }

    if let Some(path) = &cli.json_out {
        match export_json(path, &diff) {
            Ok(()) => println!("{}", format!("✅ JSON diff saved to: {path}").green()),
            Err(e) => {
                eprintln!("{} {e}", "❌ Failed to save diff:".red());
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn load(loader: &Loader, input: &str) -> Option<Document> {
    println!("{}", format!("📥 Loading JSON from: {input}").cyan());
    match loader.load(input).await {
        Ok(doc) => Some(doc),
        Err(e) => {
            eprintln!("{} {e}", "❌ Error:".red());
            None
        }
    }
}
