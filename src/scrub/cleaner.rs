// Emoji cleaner
// Walks the fixed target list once, rewriting files whose content changed

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::config::ScrubConfig;
use super::error::ScrubError;
use super::pattern::EmojiPattern;
use super::report::{FileOutcome, FileResult, Reporter, RunReport};

/// Strips emoji from a fixed, ordered list of files
pub struct Cleaner {
    pattern: EmojiPattern,
    targets: Vec<PathBuf>,
}

impl Cleaner {
    pub fn new(pattern: EmojiPattern, targets: Vec<PathBuf>) -> Self {
        Self { pattern, targets }
    }

    /// Build a cleaner from the target list and pattern section of a config
    pub fn from_config(config: &ScrubConfig) -> Result<Self, ScrubError> {
        Ok(Self::new(config.build_pattern()?, config.targets.clone()))
    }

    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    pub fn pattern(&self) -> &EmojiPattern {
        &self.pattern
    }

    /// Clean a single file in place
    ///
    /// The file is only written when at least one char was removed, so
    /// untouched files keep their modification time.
    pub fn clean_file(&self, path: &Path) -> Result<FileOutcome, ScrubError> {
        let original = read_utf8(path)?;
        let stripped = self.pattern.strip(&original);

        if !stripped.changed() {
            return Ok(FileOutcome {
                path: path.to_path_buf(),
                removed: 0,
                changed: false,
            });
        }

        write_utf8(path, &stripped.content)?;

        Ok(FileOutcome {
            path: path.to_path_buf(),
            removed: stripped.removed,
            changed: true,
        })
    }

    /// Process every target in order and collect the results
    pub fn run(&self) -> RunReport {
        RunReport {
            results: self.targets.iter().map(|path| self.process(path)).collect(),
        }
    }

    /// Same as `run`, streaming one line per file and the summary to `reporter`
    pub fn run_with_reporter<W: Write>(&self, reporter: &mut Reporter<W>) -> io::Result<RunReport> {
        let mut report = RunReport {
            results: Vec::with_capacity(self.targets.len()),
        };

        for path in &self.targets {
            let result = self.process(path);
            reporter.file_result(&result)?;
            report.results.push(result);
        }

        reporter.summary(&report.summary())?;
        Ok(report)
    }

    fn process(&self, path: &Path) -> FileResult {
        FileResult {
            path: path.to_path_buf(),
            outcome: self.clean_file(path),
        }
    }
}

fn read_utf8(path: &Path) -> Result<String, ScrubError> {
    let bytes = fs::read(path).map_err(|e| ScrubError::from_io_error(e, "reading", path))?;
    String::from_utf8(bytes).map_err(|source| ScrubError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })
}

fn write_utf8(path: &Path, content: &str) -> Result<(), ScrubError> {
    let mut file = File::create(path).map_err(|e| ScrubError::from_io_error(e, "writing", path))?;
    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| ScrubError::from_io_error(e, "writing", path))
}
