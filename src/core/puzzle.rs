//! The puzzle shown for one round

use super::WordEntry;
use serde::{Deserialize, Serialize};

/// A scrambled word plus the metadata needed to judge and score it
///
/// Owned by exactly one session and carried with it between turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    original: String,
    definition: String,
    scrambled: String,
    score: u32,
}

impl Puzzle {
    /// Build a puzzle from an entry and its scrambled form
    #[must_use]
    pub fn new(entry: &WordEntry, scrambled: String) -> Self {
        Self {
            original: entry.word().to_string(),
            definition: entry.definition().to_string(),
            scrambled,
            score: entry.score(),
        }
    }

    /// The answer
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The clue shown alongside the scrambled letters
    #[inline]
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The letters as presented to the player
    #[inline]
    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}
