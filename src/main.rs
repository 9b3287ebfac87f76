use anyhow::{Context, Result};
use clap::Parser;

use emoji_scrub::scrub::{Cleaner, Reporter, ScrubConfig};

/// Strip emoji from the built-in list of documentation files.
///
/// The target files and the emoji ranges are compiled into the binary;
/// there are no options that change what gets processed.
#[derive(Parser)]
#[command(name = "emoji-scrub", version, about)]
struct Cli {}

fn main() -> Result<()> {
    let _ = Cli::parse();

    let config = ScrubConfig::builtin().context("Failed to parse built-in configuration")?;
    let cleaner = Cleaner::from_config(&config).context("Failed to build emoji pattern")?;

    // Per-file failures are reported inline and never change the exit status
    let mut reporter = Reporter::stdout();
    cleaner
        .run_with_reporter(&mut reporter)
        .context("Failed to write report")?;

    Ok(())
}
