//! Player settings and score history

use crate::core::{Player, Tier};
use crate::game::{Engine, TierChange};
use crate::store::{ScoreRecord, ScoreStore, SessionCarrier, StoreError};
use std::collections::BTreeMap;

/// Result of a tier request typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierOutcome {
    /// Saved; `change` says what happened to the session
    Set { tier: Tier, change: TierChange },
    /// The name was not a tier; nothing changed
    Rejected { input: String, kept: Tier },
}

impl TierOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Set {
                tier,
                change: TierChange::Deferred,
            } => format!("Difficulty set to: {tier}. It applies from your next game."),
            Self::Set { tier, .. } => format!("Difficulty set to: {tier}."),
            Self::Rejected { input, kept } => {
                format!("Error editing difficulty: '{input}' is not a difficulty. Keeping {kept}.")
            }
        }
    }
}

/// Validate a tier name and save it for the player
///
/// Unknown names are rejected here, before they reach the session.
///
/// # Errors
///
/// Returns `StoreError` if the tier or session cannot be saved.
pub fn change_tier<S: ScoreStore + SessionCarrier>(
    engine: &mut Engine<'_, S>,
    player: &Player,
    input: &str,
) -> Result<TierOutcome, StoreError> {
    match input.parse::<Tier>() {
        Ok(tier) => {
            let change = engine.set_tier(player, tier)?;
            Ok(TierOutcome::Set { tier, change })
        }
        Err(_) => Ok(TierOutcome::Rejected {
            input: input.to_string(),
            kept: engine.tier(player)?,
        }),
    }
}

/// A player's finished games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreHistory {
    pub player: String,
    pub records: Vec<ScoreRecord>,
    pub best: BTreeMap<Tier, u32>,
}

/// Collect score history, optionally for one tier only
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be read.
pub fn score_history<S: ScoreStore>(
    store: &S,
    player: &Player,
    tier: Option<Tier>,
) -> Result<ScoreHistory, StoreError> {
    let records: Vec<ScoreRecord> = store
        .scores(player.key())?
        .into_iter()
        .filter(|r| tier.is_none_or(|t| r.tier == t))
        .collect();

    let mut best = BTreeMap::new();
    for t in Tier::ALL.into_iter().filter(|&t| tier.is_none_or(|only| only == t)) {
        let points = store.high_score(player.key(), t)?;
        if points > 0 {
            best.insert(t, points);
        }
    }

    Ok(ScoreHistory {
        player: player.key().to_string(),
        records,
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Phase, WordBank};
    use crate::store::MemoryStore;
    use chrono::Utc;

    fn record(points: u32, tier: Tier) -> ScoreRecord {
        ScoreRecord {
            points,
            tier,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn valid_tier_is_saved() {
        let bank = WordBank::default();
        let mut engine = Engine::new(&bank, MemoryStore::new());
        let player = Player::from_name("ada");

        let outcome = change_tier(&mut engine, &player, "Expert").unwrap();
        assert_eq!(
            outcome,
            TierOutcome::Set {
                tier: Tier::Expert,
                change: TierChange::Applied
            }
        );
        assert_eq!(outcome.message(), "Difficulty set to: expert.");
        assert_eq!(
            engine.store().saved_tier("ada").unwrap(),
            Some(Tier::Expert)
        );
        assert_eq!(engine.session(&player).unwrap().phase(), Phase::NoPuzzle);
    }

    #[test]
    fn unknown_tier_is_rejected_at_the_boundary() {
        let bank = WordBank::default();
        let mut engine = Engine::new(&bank, MemoryStore::new());
        let player = Player::from_name("ada");
        change_tier(&mut engine, &player, "hard").unwrap();

        let outcome = change_tier(&mut engine, &player, "impossible").unwrap();
        assert_eq!(
            outcome,
            TierOutcome::Rejected {
                input: "impossible".to_string(),
                kept: Tier::Hard
            }
        );
        assert!(outcome.message().starts_with("Error editing difficulty"));
        assert_eq!(engine.store().saved_tier("ada").unwrap(), Some(Tier::Hard));
    }

    #[test]
    fn deferred_message_mentions_next_game() {
        let outcome = TierOutcome::Set {
            tier: Tier::Hard,
            change: TierChange::Deferred,
        };
        assert!(outcome.message().contains("next game"));
    }

    #[test]
    fn history_filters_by_tier() {
        let mut store = MemoryStore::new();
        store.record_score("ada", record(5, Tier::Easy)).unwrap();
        store.record_score("ada", record(30, Tier::Hard)).unwrap();
        store.record_score("ada", record(10, Tier::Easy)).unwrap();
        store.set_high_score("ada", Tier::Easy, 10).unwrap();
        store.set_high_score("ada", Tier::Hard, 30).unwrap();
        let player = Player::from_name("ada");

        let all = score_history(&store, &player, None).unwrap();
        assert_eq!(all.records.len(), 3);
        assert_eq!(all.records[0].points, 30);
        assert_eq!(all.best.len(), 2);

        let easy = score_history(&store, &player, Some(Tier::Easy)).unwrap();
        let points: Vec<u32> = easy.records.iter().map(|r| r.points).collect();
        assert_eq!(points, vec![10, 5]);
        assert_eq!(easy.best.get(&Tier::Easy), Some(&10));
        assert_eq!(easy.best.get(&Tier::Hard), None);
    }

    #[test]
    fn history_for_new_player_is_empty() {
        let store = MemoryStore::new();
        let history = score_history(&store, &Player::from_name("nobody"), None).unwrap();
        assert!(history.records.is_empty());
        assert!(history.best.is_empty());
        assert_eq!(history.player, "nobody");
    }
}
