//! Scramble audit command
//!
//! Scrambles every dictionary word many times and checks the results: each
//! scramble must be a permutation of its word and must differ from it, and the
//! share of letters left in place should track the uniform-shuffle expectation.

use crate::core::Tier;
use crate::game::{WordBank, expected_fixed_fraction, fixed_points, is_permutation, scramble};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Audit figures for one tier
#[derive(Debug, Clone, PartialEq)]
pub struct TierAudit {
    pub tier: Tier,
    pub words: usize,
    /// Total scrambles drawn across all words
    pub samples: usize,
    /// Scrambles that were not a permutation of their word
    pub violations: usize,
    /// Scrambles identical to their word
    pub identities: usize,
    /// Mean share of letters left in place
    pub observed_fixed: f64,
    /// Mean share expected from a uniform shuffle that rejects the identity
    pub expected_fixed: f64,
}

impl TierAudit {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.violations == 0 && self.identities == 0
    }
}

/// Result of an audit run
#[derive(Debug, Clone)]
pub struct AuditResult {
    pub tiers: Vec<TierAudit>,
    pub seed: u64,
    pub duration: Duration,
}

impl AuditResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.tiers.iter().all(TierAudit::passed)
    }
}

#[derive(Default)]
struct WordTally {
    violations: usize,
    identities: usize,
    observed: f64,
    expected: f64,
}

fn audit_word(word: &str, samples: usize, rng: &mut StdRng) -> WordTally {
    let len = word.chars().count().max(1) as f64;
    let mut tally = WordTally {
        expected: expected_fixed_fraction(word).unwrap_or(1.0),
        ..WordTally::default()
    };

    let mut fixed = 0usize;
    for _ in 0..samples {
        let scrambled = scramble(word, rng);
        if !is_permutation(word, &scrambled) {
            tally.violations += 1;
        }
        if scrambled == word {
            tally.identities += 1;
        }
        fixed += fixed_points(word, &scrambled);
    }

    if samples > 0 {
        tally.observed = fixed as f64 / (samples as f64 * len);
    }
    tally
}

/// Audit the scrambler over the given tiers
///
/// Each word gets its own generator seeded from `seed` and its position, so a
/// seeded run is reproducible regardless of thread scheduling.
pub fn run_audit(
    bank: &WordBank,
    tiers: &[Tier],
    samples: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> AuditResult {
    let seed = seed.unwrap_or_else(rand::random);
    let total_words: usize = tiers.iter().map(|&t| bank.words_for(t).len()).sum();
    info!(words = total_words, samples, seed, "Starting scramble audit");

    let pb = if show_progress {
        ProgressBar::new(total_words as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut offset = 0u64;
    let mut results = Vec::with_capacity(tiers.len());

    for &tier in tiers {
        let words = bank.words_for(tier);
        pb.set_message(tier.to_string());

        let tallies: Vec<WordTally> = words
            .par_iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(offset + i as u64));
                let tally = audit_word(entry.word(), samples, &mut rng);
                pb.inc(1);
                tally
            })
            .collect();
        offset += words.len() as u64;

        let count = tallies.len().max(1) as f64;
        let audit = TierAudit {
            tier,
            words: words.len(),
            samples: words.len() * samples,
            violations: tallies.iter().map(|t| t.violations).sum(),
            identities: tallies.iter().map(|t| t.identities).sum(),
            observed_fixed: tallies.iter().map(|t| t.observed).sum::<f64>() / count,
            expected_fixed: tallies.iter().map(|t| t.expected).sum::<f64>() / count,
        };

        if !audit.passed() {
            warn!(
                %tier,
                violations = audit.violations,
                identities = audit.identities,
                "Scramble audit found bad scrambles"
            );
        }
        results.push(audit);
    }

    pb.finish_and_clear();

    AuditResult {
        tiers: results,
        seed,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    fn bank() -> WordBank {
        WordBank::partial(vec![
            WordEntry::new("cat", "feline", Tier::Easy, 5).unwrap(),
            WordEntry::new("dog", "canine", Tier::Easy, 5).unwrap(),
            WordEntry::new("banana", "fruit", Tier::Hard, 15).unwrap(),
        ])
    }

    #[test]
    fn audit_passes_on_valid_words() {
        let result = run_audit(&bank(), &[Tier::Easy, Tier::Hard], 200, Some(7), false);

        assert!(result.passed());
        assert_eq!(result.seed, 7);
        assert_eq!(result.tiers.len(), 2);
        assert_eq!(result.tiers[0].words, 2);
        assert_eq!(result.tiers[0].samples, 400);
        assert_eq!(result.tiers[1].samples, 200);
    }

    #[test]
    fn observed_fixed_share_is_near_expected() {
        let result = run_audit(&bank(), &[Tier::Easy], 3000, Some(11), false);
        let easy = &result.tiers[0];

        // cat and dog: five arrangements each, three letters in place among them
        assert!((easy.expected_fixed - 0.2).abs() < 1e-9);
        assert!((easy.observed_fixed - easy.expected_fixed).abs() < 0.03);
    }

    #[test]
    fn seeded_runs_repeat() {
        let a = run_audit(&bank(), &[Tier::Easy, Tier::Hard], 50, Some(3), false);
        let b = run_audit(&bank(), &[Tier::Easy, Tier::Hard], 50, Some(3), false);

        let shares = |r: &AuditResult| r.tiers.iter().map(|t| t.observed_fixed).collect::<Vec<_>>();
        assert_eq!(shares(&a), shares(&b));
    }

    #[test]
    fn empty_tier_reports_zero_words() {
        let result = run_audit(&bank(), &[Tier::Expert], 10, Some(1), false);
        let expert = &result.tiers[0];

        assert_eq!(expert.words, 0);
        assert_eq!(expert.samples, 0);
        assert!(expert.passed());
        assert!(expert.observed_fixed.abs() < f64::EPSILON);
    }
}
