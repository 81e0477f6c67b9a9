//! Dictionary loading utilities
//!
//! Provides functions to parse tab separated dictionaries or convert the embedded table.
//!
//! Each non-blank line that does not start with `#` holds
//! `tier<TAB>word<TAB>score<TAB>definition`.

use crate::core::{EntryError, Tier, TierError, WordEntry};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    MissingField { line: usize, field: &'static str },
    BadTier { line: usize, source: TierError },
    BadScore { line: usize, value: String },
    BadEntry { line: usize, source: EntryError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read dictionary: {e}"),
            Self::MissingField { line, field } => {
                write!(f, "Line {line}: missing {field} field")
            }
            Self::BadTier { line, source } => write!(f, "Line {line}: {source}"),
            Self::BadScore { line, value } => {
                write!(f, "Line {line}: score '{value}' is not a whole number")
            }
            Self::BadEntry { line, source } => write!(f, "Line {line}: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::BadTier { source, .. } => Some(source),
            Self::BadEntry { source, .. } => Some(source),
            Self::MissingField { .. } | Self::BadScore { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load entries from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or the first malformed line.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.tsv").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_entries(&content)
}

/// Parse dictionary text
///
/// Unlike the embedded table, custom text is untrusted, so the first bad line is an error
/// rather than being skipped.
///
/// # Errors
///
/// Returns `LoadError` naming the 1-based line that failed.
pub fn parse_entries(content: &str) -> Result<Vec<WordEntry>, LoadError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<WordEntry, LoadError> {
    let mut fields = text.trim().splitn(4, '\t').map(str::trim);
    let mut next = |field: &'static str| {
        fields
            .next()
            .filter(|value| !value.is_empty())
            .ok_or(LoadError::MissingField { line, field })
    };

    let tier = next("tier")?;
    let word = next("word")?;
    let score = next("score")?;
    let definition = next("definition")?;

    let tier: Tier = tier
        .parse()
        .map_err(|source| LoadError::BadTier { line, source })?;
    let score: u32 = score.parse().map_err(|_| LoadError::BadScore {
        line,
        value: score.to_string(),
    })?;

    WordEntry::new(word, definition, tier, score)
        .map_err(|source| LoadError::BadEntry { line, source })
}

/// Convert the embedded table to entries
///
/// Rows that fail validation are skipped.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::entries_from_table;
/// use word_scramble::wordlists::ENTRIES;
///
/// let entries = entries_from_table(ENTRIES);
/// assert_eq!(entries.len(), ENTRIES.len());
/// ```
#[must_use]
pub fn entries_from_table(table: &[(&str, &str, u32, &str)]) -> Vec<WordEntry> {
    table
        .iter()
        .filter_map(|&(tier, word, score, definition)| {
            let tier = tier.parse().ok()?;
            WordEntry::new(word, definition, tier, score).ok()
        })
        .collect()
}
