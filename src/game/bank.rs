//! Word bank
//!
//! Dictionary entries grouped by tier. Built once at startup and shared read-only.

use crate::core::{Tier, WordEntry};
use crate::wordlists::{ENTRIES, loader::entries_from_table};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use tracing::{debug, info, warn};

/// Error type for bank construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    EmptyTier(Tier),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTier(tier) => write!(f, "Dictionary has no words for {tier} difficulty"),
        }
    }
}

impl std::error::Error for BankError {}

/// Immutable mapping from tier to its candidate words
///
/// Words are unique within a tier; the same word may appear in several tiers.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    tiers: FxHashMap<Tier, Vec<WordEntry>>,
}

impl WordBank {
    /// Build a bank that requires every tier to have at least one word
    ///
    /// # Errors
    ///
    /// Returns `BankError::EmptyTier` for the first tier without entries.
    pub fn new(entries: impl IntoIterator<Item = WordEntry>) -> Result<Self, BankError> {
        let bank = Self::partial(entries);

        if let Some(tier) = Tier::ALL
            .into_iter()
            .find(|&tier| bank.words_for(tier).is_empty())
        {
            return Err(BankError::EmptyTier(tier));
        }

        info!(words = bank.len(), "Word bank ready");
        Ok(bank)
    }

    /// Build a bank that tolerates empty tiers
    ///
    /// Selecting from an empty tier yields no word, which the session treats as
    /// an aborted round.
    #[must_use]
    pub fn partial(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        let mut tiers: FxHashMap<Tier, Vec<WordEntry>> = FxHashMap::default();
        let mut seen: FxHashSet<(Tier, String)> = FxHashSet::default();

        for entry in entries {
            if seen.insert((entry.tier(), entry.word().to_string())) {
                tiers.entry(entry.tier()).or_default().push(entry);
            } else {
                warn!(word = entry.word(), tier = %entry.tier(), "Skipping duplicate word");
            }
        }

        for tier in Tier::ALL {
            debug!(%tier, words = tiers.get(&tier).map_or(0, Vec::len), "Tier loaded");
        }

        Self { tiers }
    }

    /// Build the bank from the dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `BankError` if the embedded dictionary lacks a tier.
    pub fn embedded() -> Result<Self, BankError> {
        Self::new(entries_from_table(ENTRIES))
    }

    /// Candidate words for a tier, empty if the tier has none
    #[must_use]
    pub fn words_for(&self, tier: Tier) -> &[WordEntry] {
        self.tiers.get(&tier).map_or(&[], Vec::as_slice)
    }

    /// Total entries across all tiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
