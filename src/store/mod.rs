//! Persistence collaborators
//!
//! The engine only ever talks to these traits: [`ScoreStore`] for high scores,
//! score history and the saved tier, [`SessionCarrier`] for the per-player
//! session record that is read at the start of a turn and written at its end.

mod error;
mod json;
mod memory;

pub use error::StoreError;
pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::core::Tier;
use crate::game::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub points: u32,
    pub tier: Tier,
    pub timestamp: DateTime<Utc>,
}

/// Score and settings persistence
pub trait ScoreStore {
    /// Best score recorded for the tier, 0 if none
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read.
    fn high_score(&self, player: &str, tier: Tier) -> Result<u32, StoreError>;

    /// Overwrite the best score for the tier
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set_high_score(&mut self, player: &str, tier: Tier, points: u32) -> Result<(), StoreError>;

    /// Append a finished game to the player's history
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written.
    fn record_score(&mut self, player: &str, record: ScoreRecord) -> Result<(), StoreError>;

    /// The player's preferred tier, if one was saved
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read.
    fn saved_tier(&self, player: &str) -> Result<Option<Tier>, StoreError>;

    /// Save the player's preferred tier
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set_saved_tier(&mut self, player: &str, tier: Tier) -> Result<(), StoreError>;

    /// History of finished games, best first and newest first among ties
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read.
    fn scores(&self, player: &str) -> Result<Vec<ScoreRecord>, StoreError>;
}

/// Opaque per-player storage for the session record between turns
pub trait SessionCarrier {
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read.
    fn load_session(&self, player: &str) -> Result<Option<Session>, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written.
    fn save_session(&mut self, player: &str, session: &Session) -> Result<(), StoreError>;
}

/// Order records best first, newest first among equal scores
pub(crate) fn sort_scores(records: &mut [ScoreRecord]) {
    records.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
}
