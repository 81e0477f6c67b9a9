//! Per-player session state machine
//!
//! A session is a plain value: it is loaded at the start of every turn, changed
//! by exactly one transition, and written back. Nothing about a game lives
//! anywhere else between turns.
//!
//! ```text
//! NoPuzzle --start--> Active --correct / wrong with tries left--> Active
//!                       |
//!                       +--wrong, no tries left--> GameOver --reset--> NoPuzzle
//! ```

use super::{
    Action, GameError, WordBank, has_distinct_arrangement, is_permutation, matches, scramble,
    select,
};
use crate::core::{Puzzle, Tier};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Attempts a player has at the start of a game
pub const MAX_ATTEMPTS: u8 = 3;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoPuzzle,
    Active,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPuzzle => f.write_str("waiting for a new game"),
            Self::Active => f.write_str("in a round"),
            Self::GameOver => f.write_str("game over"),
        }
    }
}

/// Result of judging one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Judgement {
    /// The word was recovered and a new round drawn
    Correct { awarded: u32, points: u32 },
    /// Wrong, with tries left; a new round was drawn
    Incorrect { attempts_remaining: u8, word: String },
    /// Wrong with the last try; the session is now over
    GameOver { points: u32, word: String },
}

/// Outcome of asking for a different tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierChange {
    /// The session now uses the tier
    Applied,
    /// A puzzle is in progress; the tier takes effect at the next game
    Deferred,
    /// The session already uses the tier
    Unchanged,
}

/// One player's game
///
/// Loading checks the same invariants the transitions keep, so a carried
/// record that was edited by hand is rejected instead of played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    puzzle: Option<Puzzle>,
    points: u32,
    attempts_remaining: u8,
    tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pending_tier: Option<Tier>,
}

/// A session as read from storage, before its invariants are checked
#[derive(Deserialize)]
struct SessionRecord {
    puzzle: Option<Puzzle>,
    points: u32,
    attempts_remaining: u8,
    tier: Tier,
    #[serde(default)]
    pending_tier: Option<Tier>,
}

/// Reason a stored session was rejected
#[derive(Debug)]
struct InvalidSession(&'static str);

impl fmt::Display for InvalidSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid session: {}", self.0)
    }
}

impl TryFrom<SessionRecord> for Session {
    type Error = InvalidSession;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        if record.attempts_remaining > MAX_ATTEMPTS {
            return Err(InvalidSession("more attempts than a game allows"));
        }
        if let Some(puzzle) = &record.puzzle {
            if record.attempts_remaining == 0 {
                return Err(InvalidSession("puzzle present after game over"));
            }
            if !is_permutation(puzzle.original(), puzzle.scrambled()) {
                return Err(InvalidSession("scrambled letters do not match the word"));
            }
            if has_distinct_arrangement(puzzle.original())
                && puzzle.scrambled() == puzzle.original()
            {
                return Err(InvalidSession("scrambled word equals the answer"));
            }
        }

        Ok(Self {
            puzzle: record.puzzle,
            points: record.points,
            attempts_remaining: record.attempts_remaining,
            tier: record.tier,
            pending_tier: record.pending_tier,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tier::default())
    }
}

impl Session {
    /// A fresh session waiting for its first game
    #[must_use]
    pub const fn new(tier: Tier) -> Self {
        Self {
            puzzle: None,
            points: 0,
            attempts_remaining: MAX_ATTEMPTS,
            tier,
            pending_tier: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.attempts_remaining == 0 {
            Phase::GameOver
        } else if self.puzzle.is_some() {
            Phase::Active
        } else {
            Phase::NoPuzzle
        }
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Tier waiting to take effect at the next game, if any
    #[inline]
    #[must_use]
    pub const fn pending_tier(&self) -> Option<Tier> {
        self.pending_tier
    }

    /// Return to `NoPuzzle` with full attempts and no points
    ///
    /// Applies a deferred tier change. Valid from any phase.
    pub fn reset(&mut self) {
        let tier = self.pending_tier.take().unwrap_or(self.tier);
        debug!(%tier, "Session reset");
        *self = Self::new(tier);
    }

    /// Ask for a different tier
    ///
    /// Applied at once unless a puzzle is active. Choosing a tier after a game
    /// has ended starts over at `NoPuzzle`.
    pub fn request_tier(&mut self, tier: Tier) -> TierChange {
        match self.phase() {
            Phase::Active => {
                if tier == self.tier {
                    self.pending_tier = None;
                    return TierChange::Unchanged;
                }
                info!(current = %self.tier, requested = %tier, "Tier change deferred");
                self.pending_tier = Some(tier);
                TierChange::Deferred
            }
            Phase::GameOver => {
                self.pending_tier = Some(tier);
                self.reset();
                TierChange::Applied
            }
            Phase::NoPuzzle => {
                self.pending_tier = None;
                if tier == self.tier {
                    return TierChange::Unchanged;
                }
                self.tier = tier;
                TierChange::Applied
            }
        }
    }

    /// Begin a game by drawing the first puzzle
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the session is at `NoPuzzle`
    /// - `EmptyTier` if the tier has no words; the session stays at `NoPuzzle`
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        bank: &WordBank,
        rng: &mut R,
    ) -> Result<&Puzzle, GameError> {
        let phase = self.phase();
        if phase != Phase::NoPuzzle {
            return Err(GameError::InvalidTransition {
                action: Action::Start,
                phase,
            });
        }

        self.points = 0;
        self.attempts_remaining = MAX_ATTEMPTS;
        self.draw(bank, rng)
    }

    /// Judge a guess against the current puzzle
    ///
    /// A correct guess adds the puzzle's score; a wrong guess costs one attempt.
    /// Either way a new puzzle is drawn, unless the last attempt was just spent.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if no puzzle is active; the session is unchanged
    /// - `EmptyTier` if the next puzzle cannot be drawn; the session is reset
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        answer: &str,
        bank: &WordBank,
        rng: &mut R,
    ) -> Result<Judgement, GameError> {
        let phase = self.phase();
        let Some(puzzle) = self.puzzle.as_ref().filter(|_| phase == Phase::Active) else {
            return Err(GameError::InvalidTransition {
                action: Action::Submit,
                phase,
            });
        };

        let judgement = if matches(answer, puzzle.original()) {
            let awarded = puzzle.score();
            self.points = self.points.saturating_add(awarded);
            info!(awarded, points = self.points, "Correct guess");
            Judgement::Correct {
                awarded,
                points: self.points,
            }
        } else {
            let word = puzzle.original().to_string();
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            info!(attempts_remaining = self.attempts_remaining, "Wrong guess");

            if self.attempts_remaining == 0 {
                self.puzzle = None;
                info!(points = self.points, tier = %self.tier, "Game over");
                return Ok(Judgement::GameOver {
                    points: self.points,
                    word,
                });
            }

            Judgement::Incorrect {
                attempts_remaining: self.attempts_remaining,
                word,
            }
        };

        self.draw(bank, rng)?;
        Ok(judgement)
    }

    /// Replace the puzzle with a fresh one from the session's tier
    fn draw<R: Rng + ?Sized>(
        &mut self,
        bank: &WordBank,
        rng: &mut R,
    ) -> Result<&Puzzle, GameError> {
        let Some(entry) = select(bank, self.tier, rng) else {
            let tier = self.tier;
            self.reset();
            return Err(GameError::EmptyTier(tier));
        };

        let scrambled = scramble(entry.word(), rng);
        debug!(scrambled = %scrambled, score = entry.score(), "New round");
        Ok(&*self.puzzle.insert(Puzzle::new(entry, scrambled)))
    }
}
