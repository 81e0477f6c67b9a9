//! Turn driver
//!
//! Each public method is one turn: read the player's session from the carrier,
//! apply one transition, write it back. Game over is reported to the score store
//! in the same turn.

use super::{GameError, Judgement, Session, TierChange, WordBank};
use crate::core::{Player, Puzzle, Tier};
use crate::store::{ScoreRecord, ScoreStore, SessionCarrier, StoreError};
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{info, instrument, warn};

/// Final tally of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub points: u32,
    pub tier: Tier,
    pub timestamp: DateTime<Utc>,
    /// Set when this game beat the player's stored best for the tier
    pub new_high_score: Option<u32>,
    /// The word that was on screen when the last try was spent
    pub word: String,
}

/// What a turn did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    Started,
    Correct { awarded: u32 },
    Incorrect { attempts_remaining: u8 },
    GameOver(GameReport),
}

impl TurnEvent {
    /// Short message for the player, if the turn warrants one
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Started => None,
            Self::Correct { awarded } => Some(format!("+ {awarded} points!")),
            Self::Incorrect { attempts_remaining } => Some(format!(
                "wrong! {attempts_remaining} more {}.",
                if *attempts_remaining == 1 { "try" } else { "tries" }
            )),
            Self::GameOver(report) => Some(report.new_high_score.map_or_else(
                || format!("Game over! Final score: {} points.", report.points),
                |points| format!("{points} is a new high score for {} difficulty!", report.tier),
            )),
        }
    }
}

/// Session state after a turn, plus what happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub session: Session,
    pub event: TurnEvent,
}

impl Turn {
    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.session.puzzle()
    }
}

/// Drives turns for any number of players over a shared word bank
pub struct Engine<'b, S> {
    bank: &'b WordBank,
    store: S,
    clock: fn() -> DateTime<Utc>,
}

impl<'b, S: ScoreStore + SessionCarrier> Engine<'b, S> {
    #[must_use]
    pub fn new(bank: &'b WordBank, store: S) -> Self {
        Self {
            bank,
            store,
            clock: Utc::now,
        }
    }

    /// Use a fixed time source for game-over timestamps
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn bank(&self) -> &'b WordBank {
        self.bank
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// The player's carried session, or a fresh one at their saved tier
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the carrier or score store cannot be read.
    pub fn session(&self, player: &Player) -> Result<Session, StoreError> {
        self.load(player).map(|(session, _)| session)
    }

    /// The session plus whether the carrier already held one
    fn load(&self, player: &Player) -> Result<(Session, bool), StoreError> {
        if let Some(session) = self.store.load_session(player.key())? {
            return Ok((session, true));
        }
        let tier = self.store.saved_tier(player.key())?.unwrap_or_default();
        Ok((Session::new(tier), false))
    }

    /// Start a fresh game, abandoning any game in progress
    ///
    /// # Errors
    ///
    /// - `EmptyTier` if the tier has no words; a carried session is saved reset,
    ///   and none is created for a new player
    /// - `Store` if the session cannot be loaded or saved
    #[instrument(skip(self, rng), fields(player = %player))]
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        player: &Player,
        rng: &mut R,
    ) -> Result<Turn, GameError> {
        let (mut session, carried) = self.load(player)?;
        session.reset();

        if let Err(e) = session.start(self.bank, rng) {
            if carried {
                self.store.save_session(player.key(), &session)?;
            }
            return Err(e);
        }
        self.store.save_session(player.key(), &session)?;

        info!(tier = %session.tier(), "Game started");
        Ok(Turn {
            session,
            event: TurnEvent::Started,
        })
    }

    /// Judge a guess and, if it ends the game, report the score
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if no puzzle is active; nothing is saved
    /// - `EmptyTier` if the next word cannot be drawn; the session is saved reset
    /// - `Store` if the session or score cannot be loaded or saved
    #[instrument(skip(self, answer, rng), fields(player = %player))]
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        player: &Player,
        answer: &str,
        rng: &mut R,
    ) -> Result<Turn, GameError> {
        let mut session = self.session(player)?;

        let judgement = match session.submit(answer, self.bank, rng) {
            Ok(judgement) => judgement,
            Err(e @ GameError::EmptyTier(_)) => {
                self.store.save_session(player.key(), &session)?;
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let event = match judgement {
            Judgement::Correct { awarded, .. } => Ok(TurnEvent::Correct { awarded }),
            Judgement::Incorrect {
                attempts_remaining, ..
            } => Ok(TurnEvent::Incorrect { attempts_remaining }),
            Judgement::GameOver { points, word } => self
                .finish(player, session.tier(), points, word)
                .map(TurnEvent::GameOver),
        };

        // The game is over even if reporting it failed
        self.store.save_session(player.key(), &session)?;
        Ok(Turn {
            session,
            event: event?,
        })
    }

    /// Abandon any game and return to `NoPuzzle`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the session cannot be loaded or saved.
    #[instrument(skip(self), fields(player = %player))]
    pub fn reset(&mut self, player: &Player) -> Result<Session, StoreError> {
        let mut session = self.session(player)?;
        session.reset();
        self.store.save_session(player.key(), &session)?;
        Ok(session)
    }

    /// Save a preferred tier and apply it to the session
    ///
    /// The saved preference changes at once; the session follows the rules of
    /// [`Session::request_tier`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the preference or session cannot be saved.
    #[instrument(skip(self), fields(player = %player))]
    pub fn set_tier(&mut self, player: &Player, tier: Tier) -> Result<TierChange, StoreError> {
        let mut session = self.session(player)?;
        let change = session.request_tier(tier);

        self.store.set_saved_tier(player.key(), tier)?;
        self.store.save_session(player.key(), &session)?;
        Ok(change)
    }

    /// The player's tier: the session's pending or current tier
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the session cannot be loaded.
    pub fn tier(&self, player: &Player) -> Result<Tier, StoreError> {
        let session = self.session(player)?;
        Ok(session.pending_tier().unwrap_or(session.tier()))
    }

    /// Report a finished game
    fn finish(
        &mut self,
        player: &Player,
        tier: Tier,
        points: u32,
        word: String,
    ) -> Result<GameReport, GameError> {
        let timestamp = (self.clock)();
        let mut report = GameReport {
            points,
            tier,
            timestamp,
            new_high_score: None,
            word,
        };

        if player.is_guest() {
            info!(points, %tier, "Guest game finished, not recorded");
            return Ok(report);
        }

        let key = player.key();
        let best = self.store.high_score(key, tier)?;

        self.store
            .record_score(
                key,
                ScoreRecord {
                    points,
                    tier,
                    timestamp,
                },
            )
            .inspect_err(|e| warn!(error = %e, "Failed to record score"))?;

        if points > best {
            info!(points, previous = best, %tier, "New high score");
            self.store.set_high_score(key, tier, points)?;
            report.new_high_score = Some(points);
        }

        Ok(report)
    }
}
