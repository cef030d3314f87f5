// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// The whole surface is one positional argument (the URL-list file) plus two
// optional flags. clap handles usage text, --help/--version, and the
// non-zero exit when the argument count is wrong.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "url-triage",
    version,
    about = "Check a list of URLs for dead links and other HTTP failures",
    after_help = "Example: url-triage urls.txt"
)]
pub struct Cli {
    /// Path to a text file containing one URL per line (blank lines ignored)
    pub file: PathBuf,

    /// Output a JSON report (results + summary) instead of the per-URL lines
    #[arg(long)]
    pub json: bool,

    /// Per-URL timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}
