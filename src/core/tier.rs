//! Difficulty tiers
//!
//! A tier selects the word pool and, through each word's score, the points on offer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named difficulty level
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    #[default]
    Standard,
    Hard,
    Expert,
}

impl Tier {
    /// Every tier, easiest first
    pub const ALL: [Self; 4] = [Self::Easy, Self::Standard, Self::Hard, Self::Expert];

    /// Lowercase name as used on the command line and in stored records
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Standard => "standard",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a difficulty name outside the four known tiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierError(pub String);

impl fmt::Display for TierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty '{}' (expected easy, standard, hard or expert)",
            self.0
        )
    }
}

impl std::error::Error for TierError {}

impl FromStr for Tier {
    type Err = TierError;

    /// Parse a tier name, ignoring case and surrounding whitespace
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Tier;
    ///
    /// assert_eq!("Hard".parse::<Tier>().unwrap(), Tier::Hard);
    /// assert!("medium".parse::<Tier>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.name() == normalized)
            .ok_or_else(|| TierError(s.to_string()))
    }
}
