use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "json-diff",
    about = "Compare two JSON inputs (URLs or file paths) and show the diff",
    version,
)]
pub struct Cli {
    /// First input: file path or http(s) URL
    pub input1: String,

    /// Second input: file path or http(s) URL
    pub input2: String,

    /// Write diff output to JSON file
    #[arg(short = 'j', long, value_name = "PATH")]
    pub json_out: Option<String>,

    /// Suppress output for unchanged fields
    #[arg(short, long)]
    pub silent: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
