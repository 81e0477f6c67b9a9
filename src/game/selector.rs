//! Word selection

use super::WordBank;
use crate::core::{Tier, WordEntry};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Pick a word uniformly at random from a tier
///
/// Returns `None` only when the tier has no words. Draws are with replacement:
/// the same word can come up again later in a game.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::core::{Tier, WordEntry};
/// use word_scramble::game::{WordBank, select};
///
/// let bank = WordBank::partial(vec![WordEntry::new("cat", "feline", Tier::Easy, 5).unwrap()]);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// assert_eq!(select(&bank, Tier::Easy, &mut rng).unwrap().word(), "cat");
/// assert!(select(&bank, Tier::Hard, &mut rng).is_none());
/// ```
pub fn select<'b, R: Rng + ?Sized>(
    bank: &'b WordBank,
    tier: Tier,
    rng: &mut R,
) -> Option<&'b WordEntry> {
    let picked = bank.words_for(tier).choose(rng);
    debug!(%tier, found = picked.is_some(), "Selected word");
    picked
}
