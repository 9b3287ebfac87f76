//! Emoji pattern: code-point ranges plus literal symbols, compiled once.
//!
//! The ranges are a deliberate, non-exhaustive selection. They cover the
//! pictograph blocks and dingbats that show up in generated documentation,
//! not every emoji Unicode defines.

use std::borrow::Cow;
use std::fmt::Write as _;

use regex::Regex;
use serde::Deserialize;

use super::error::ScrubError;

/// Inclusive range of Unicode code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CodeRange {
    pub start: u32,
    pub end: u32,
}

impl CodeRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Check whether a character falls inside the range.
    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&(c as u32))
    }
}

/// Ranges removed when no other configuration is given.
pub const DEFAULT_RANGES: &[CodeRange] = &[
    // Misc symbols and pictographs, emoticons, transport, supplemental
    CodeRange::new(0x1F300, 0x1F9FF),
    // Symbols and pictographs extended-A
    CodeRange::new(0x1FA70, 0x1FAFF),
    // Misc symbols, dingbats
    CodeRange::new(0x2600, 0x27BF),
    // Regional indicators
    CodeRange::new(0x1F1E0, 0x1F1FF),
];

/// Literal symbols outside the ranges: white medium star, emoji variation selector.
pub const DEFAULT_EXTRAS: &[char] = &['\u{2B50}', '\u{FE0F}'];

/// Result of stripping one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped<'a> {
    pub content: Cow<'a, str>,
    /// Number of chars removed, summed over every match.
    pub removed: usize,
}

impl Stripped<'_> {
    pub fn changed(&self) -> bool {
        matches!(self.content, Cow::Owned(_))
    }
}

/// Compiled, immutable emoji matcher.
#[derive(Debug, Clone)]
pub struct EmojiPattern {
    ranges: Vec<CodeRange>,
    extras: Vec<char>,
    regex: Regex,
}

impl EmojiPattern {
    /// Validate the parameters and compile them into a single character class.
    pub fn new(ranges: &[CodeRange], extras: &[char]) -> Result<Self, ScrubError> {
        if ranges.is_empty() && extras.is_empty() {
            return Err(ScrubError::InvalidPattern {
                reason: "no ranges or extra symbols given".to_string(),
            });
        }

        let mut class = String::from("[");
        for range in ranges {
            if range.start > range.end {
                return Err(ScrubError::InvalidPattern {
                    reason: format!("range U+{:04X}..U+{:04X} is reversed", range.start, range.end),
                });
            }
            for bound in [range.start, range.end] {
                if char::from_u32(bound).is_none() {
                    return Err(ScrubError::InvalidPattern {
                        reason: format!("U+{:04X} is not a Unicode scalar value", bound),
                    });
                }
            }
            // Infallible: writing into a String
            let _ = write!(class, "\\x{{{:X}}}-\\x{{{:X}}}", range.start, range.end);
        }

        let mut unique_extras: Vec<char> = Vec::with_capacity(extras.len());
        for &c in extras {
            if !unique_extras.contains(&c) {
                unique_extras.push(c);
                let _ = write!(class, "\\x{{{:X}}}", c as u32);
            }
        }
        class.push_str("]+");

        let regex = Regex::new(&class).map_err(|e| ScrubError::InvalidPattern {
            reason: e.to_string(),
        })?;

        Ok(Self {
            ranges: ranges.to_vec(),
            extras: unique_extras,
            regex,
        })
    }

    /// Pattern built from `DEFAULT_RANGES` and `DEFAULT_EXTRAS`.
    pub fn builtin() -> Result<Self, ScrubError> {
        Self::new(DEFAULT_RANGES, DEFAULT_EXTRAS)
    }

    pub fn ranges(&self) -> &[CodeRange] {
        &self.ranges
    }

    pub fn extras(&self) -> &[char] {
        &self.extras
    }

    /// Single-character membership test.
    pub fn is_emoji(&self, c: char) -> bool {
        self.extras.contains(&c) || self.ranges.iter().any(|r| r.contains(c))
    }

    /// Total number of chars across all non-overlapping matches.
    pub fn count_matches(&self, text: &str) -> usize {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().chars().count())
            .sum()
    }

    /// Remove every match, borrowing the input when nothing matched.
    pub fn strip<'a>(&self, text: &'a str) -> Stripped<'a> {
        let removed = self.count_matches(text);
        if removed == 0 {
            return Stripped {
                content: Cow::Borrowed(text),
                removed,
            };
        }

        Stripped {
            content: Cow::Owned(self.regex.replace_all(text, "").into_owned()),
            removed,
        }
    }
}
