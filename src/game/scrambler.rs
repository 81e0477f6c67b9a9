//! Letter scrambling
//!
//! Produces a uniformly random rearrangement of a word that never equals the word itself.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

/// Whether any arrangement of the letters differs from the word
///
/// False for words of length 0 or 1 and for words made of a single repeated letter.
#[must_use]
pub fn has_distinct_arrangement(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}

/// Scramble a word
///
/// Shuffles with Fisher-Yates and retries until the result differs from the input,
/// so every arrangement other than the word itself is equally likely. Words with
/// no distinct arrangement are returned unchanged.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::game::{is_permutation, scramble};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let scrambled = scramble("cat", &mut rng);
///
/// assert_ne!(scrambled, "cat");
/// assert!(is_permutation("cat", &scrambled));
/// assert_eq!(scramble("a", &mut rng), "a");
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    if !has_distinct_arrangement(word) {
        return word.to_string();
    }

    let original: Vec<char> = word.chars().collect();
    let mut letters = original.clone();

    loop {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }
}

/// Whether two strings use exactly the same multiset of characters
#[must_use]
pub fn is_permutation(a: &str, b: &str) -> bool {
    let mut left: Vec<char> = a.chars().collect();
    let mut right: Vec<char> = b.chars().collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

/// Number of positions where the scrambled word shows the original letter
#[must_use]
pub fn fixed_points(original: &str, scrambled: &str) -> usize {
    original
        .chars()
        .zip(scrambled.chars())
        .filter(|(a, b)| a == b)
        .count()
}

/// Expected share of positions left showing their original letter
///
/// Computed for a uniform draw over arrangements that differ from the word,
/// which is what [`scramble`] produces. Returns `None` for words that have no
/// such arrangement.
///
/// With `n` letters where letter `l` occurs `c_l` times, a uniform shuffle keeps
/// `sum(c_l^2) / n` letters in place on average; the `prod(c_l!)` shuffles that
/// reproduce the word each keep all `n`, and are excluded.
#[must_use]
pub fn expected_fixed_fraction(word: &str) -> Option<f64> {
    if !has_distinct_arrangement(word) {
        return None;
    }

    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let n = word.chars().count();
    let total = factorial(n);
    let identical: f64 = counts.values().map(|&c| factorial(c)).product();
    let mean_all = counts.values().map(|&c| (c * c) as f64).sum::<f64>() / n as f64;

    let expected = (total * mean_all - identical * n as f64) / (total - identical);
    Some(expected / n as f64)
}

fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}
