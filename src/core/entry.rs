//! Dictionary entry representation
//!
//! A `WordEntry` is one candidate word with its clue, tier and point value.
//! Entries are immutable once built.

use super::Tier;
use std::fmt;

/// A validated dictionary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    definition: String,
    tier: Tier,
    score: u32,
}

/// Error type for invalid entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    EmptyWord,
    NonAlphabetic(String),
    NoDistinctArrangement(String),
    EmptyDefinition(String),
    ZeroScore(String),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Word must not be empty"),
            Self::NonAlphabetic(word) => {
                write!(f, "Word '{word}' must contain only letters")
            }
            Self::NoDistinctArrangement(word) => {
                write!(f, "Word '{word}' has no arrangement other than itself")
            }
            Self::EmptyDefinition(word) => write!(f, "Word '{word}' has no definition"),
            Self::ZeroScore(word) => write!(f, "Word '{word}' must be worth at least 1 point"),
        }
    }
}

impl std::error::Error for EntryError {}

impl WordEntry {
    /// Create a new entry
    ///
    /// The word is trimmed and lower-cased.
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The word is empty or contains anything but letters
    /// - Every letter of the word is the same (it cannot be scrambled)
    /// - The definition is blank
    /// - The score is zero
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Tier, WordEntry};
    ///
    /// let entry = WordEntry::new("Cat", "feline", Tier::Easy, 5).unwrap();
    /// assert_eq!(entry.word(), "cat");
    ///
    /// assert!(WordEntry::new("c4t", "feline", Tier::Easy, 5).is_err());
    /// assert!(WordEntry::new("zzz", "snore", Tier::Easy, 5).is_err());
    /// ```
    pub fn new(
        word: &str,
        definition: &str,
        tier: Tier,
        score: u32,
    ) -> Result<Self, EntryError> {
        let word = word.trim().to_lowercase();

        if word.is_empty() {
            return Err(EntryError::EmptyWord);
        }

        if !word.chars().all(char::is_alphabetic) {
            return Err(EntryError::NonAlphabetic(word));
        }

        if !crate::game::has_distinct_arrangement(&word) {
            return Err(EntryError::NoDistinctArrangement(word));
        }

        let definition = definition.trim();
        if definition.is_empty() {
            return Err(EntryError::EmptyDefinition(word));
        }

        if score == 0 {
            return Err(EntryError::ZeroScore(word));
        }

        Ok(Self {
            word,
            definition: definition.to_string(),
            tier,
            score,
        })
    }

    /// The word to be recovered, lowercase
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[inline]
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Points awarded for recovering this word
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
