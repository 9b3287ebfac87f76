//! Per-file results, run summary, and the line-oriented reporter.

use std::io::{self, IsTerminal, Stdout, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use super::error::ScrubError;

/// Closing line printed after every run.
pub const CLOSING_LINE: &str = "All target files are emoji-free.";

/// Successful processing of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Chars removed (zero when nothing matched).
    pub removed: usize,
    /// Whether the file was rewritten.
    pub changed: bool,
}

/// Outcome of one target, success or failure.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: Result<FileOutcome, ScrubError>,
}

impl FileResult {
    pub fn is_err(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Counters accumulated over successfully processed files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_cleaned: usize,
    pub emoji_removed: usize,
}

impl RunSummary {
    /// Add one result; failures and unchanged files count as zero.
    pub fn record(&mut self, result: &FileResult) {
        if let Ok(outcome) = &result.outcome {
            if outcome.changed {
                self.files_cleaned += 1;
                self.emoji_removed += outcome.removed;
            }
        }
    }
}

/// All per-file results of a run, in target order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: Vec<FileResult>,
}

impl RunReport {
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for result in &self.results {
            summary.record(result);
        }
        summary
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileResult> {
        self.results.iter().filter(|r| r.is_err())
    }

    pub fn result_for(&self, path: &Path) -> Option<&FileResult> {
        self.results.iter().find(|r| r.path == path)
    }
}

/// Writes progress and summary lines, colorized when attached to a terminal.
pub struct Reporter<W: Write> {
    out: W,
    colorize: bool,
}

impl Reporter<Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let colorize = out.is_terminal();
        Self { out, colorize }
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, colorize: bool) -> Self {
        Self { out, colorize }
    }

    /// Reporter that never emits color codes.
    pub fn plain(out: W) -> Self {
        Self::new(out, false)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn file_result(&mut self, result: &FileResult) -> io::Result<()> {
        let line = match &result.outcome {
            Ok(outcome) if outcome.changed => format!(
                "Removed {} emoji from: {}",
                outcome.removed,
                outcome.path.display()
            ),
            Ok(outcome) => format!("No emoji found in: {}", outcome.path.display()),
            Err(err) => format!("Error processing {}: {}", result.path.display(), err),
        };

        if !self.colorize {
            return writeln!(self.out, "{}", line);
        }

        let styled = match &result.outcome {
            Ok(outcome) if outcome.changed => line.as_str().green(),
            Ok(_) => line.as_str().dimmed(),
            Err(_) => line.as_str().yellow(),
        };
        writeln!(self.out, "{}", styled)
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        if self.colorize {
            writeln!(self.out, "{}", "Summary:".bold())?;
        } else {
            writeln!(self.out, "Summary:")?;
        }
        writeln!(self.out, "Files cleaned: {}", summary.files_cleaned)?;
        writeln!(self.out, "Total emoji removed: {}", summary.emoji_removed)?;
        writeln!(self.out, "{}", CLOSING_LINE)?;
        self.out.flush()
    }
}
