// Emoji scrubbing
// Strips a fixed set of emoji ranges from a fixed list of files

pub mod cleaner;
pub mod config;
pub mod error;
pub mod pattern;
pub mod report;

// Re-export commonly used types for convenience
pub use cleaner::Cleaner;
pub use config::{PatternConfig, ScrubConfig};
pub use error::ScrubError;
pub use pattern::{CodeRange, EmojiPattern, Stripped, DEFAULT_EXTRAS, DEFAULT_RANGES};
pub use report::{FileOutcome, FileResult, Reporter, RunReport, RunSummary, CLOSING_LINE};
