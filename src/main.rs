//! assetstr - Bucketed string triage CLI
//!
//! Pull printable strings out of a binary asset and group them by what a
//! reverse engineer would care about.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "assetstr")]
#[command(
    author,
    version,
    about = "Bucket printable strings from a binary asset for reverse-engineering triage"
)]
#[command(long_about = "
assetstr scans a file for printable ASCII runs of 6+ characters and sorts
them into buckets: URLs, game text, asset names, music, config, developer
info, social and leaderboard/network strings. Engine internals are dropped.

EXAMPLES:
    assetstr slide.swf                      # Text report
    assetstr --json slide.swf               # JSON output for tooling
    ASSETSTR_TARGET=slide.swf assetstr      # Path from the environment
    RUST_LOG=debug assetstr slide.swf       # Show scan diagnostics on stderr
")]
struct Cli {
    /// Binary asset file to scan
    #[arg(env = "ASSETSTR_TARGET")]
    target: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let report = assetstr::scan_file(&cli.target)
        .with_context(|| format!("Failed to read {}", cli.target.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &report.to_json())?;
        writeln!(out)?;
    } else {
        report.write_text(&mut out)?;
    }
    out.flush()?;

    Ok(())
}
