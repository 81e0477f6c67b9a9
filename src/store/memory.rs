//! In-memory store

use super::{ScoreRecord, ScoreStore, SessionCarrier, StoreError, sort_scores};
use crate::core::Tier;
use crate::game::Session;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything persisted about one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub high_scores: BTreeMap<Tier, u32>,
    #[serde(default)]
    pub history: Vec<ScoreRecord>,
}

/// Store that lives only as long as the process
///
/// Also the in-memory image that [`super::JsonStore`] reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    profiles: BTreeMap<String, Profile>,
    #[serde(default)]
    sessions: BTreeMap<String, Session>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn profile(&self, player: &str) -> Option<&Profile> {
        self.profiles.get(player)
    }

    fn profile_mut(&mut self, player: &str) -> &mut Profile {
        self.profiles.entry(player.to_string()).or_default()
    }
}

impl ScoreStore for MemoryStore {
    fn high_score(&self, player: &str, tier: Tier) -> Result<u32, StoreError> {
        Ok(self
            .profile(player)
            .and_then(|p| p.high_scores.get(&tier).copied())
            .unwrap_or(0))
    }

    fn set_high_score(&mut self, player: &str, tier: Tier, points: u32) -> Result<(), StoreError> {
        self.profile_mut(player).high_scores.insert(tier, points);
        Ok(())
    }

    fn record_score(&mut self, player: &str, record: ScoreRecord) -> Result<(), StoreError> {
        self.profile_mut(player).history.push(record);
        Ok(())
    }

    fn saved_tier(&self, player: &str) -> Result<Option<Tier>, StoreError> {
        Ok(self.profile(player).and_then(|p| p.tier))
    }

    fn set_saved_tier(&mut self, player: &str, tier: Tier) -> Result<(), StoreError> {
        self.profile_mut(player).tier = Some(tier);
        Ok(())
    }

    fn scores(&self, player: &str) -> Result<Vec<ScoreRecord>, StoreError> {
        let mut records = self
            .profile(player)
            .map(|p| p.history.clone())
            .unwrap_or_default();
        sort_scores(&mut records);
        Ok(records)
    }
}

impl SessionCarrier for MemoryStore {
    fn load_session(&self, player: &str) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.get(player).cloned())
    }

    fn save_session(&mut self, player: &str, session: &Session) -> Result<(), StoreError> {
        self.sessions.insert(player.to_string(), session.clone());
        Ok(())
    }
}
