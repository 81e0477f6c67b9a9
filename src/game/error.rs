//! Engine error types

use super::Phase;
use crate::core::Tier;
use crate::store::StoreError;
use std::fmt;

/// What the player tried to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Submit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start a game"),
            Self::Submit => f.write_str("submit a guess"),
        }
    }
}

/// Per-turn failure
///
/// None of these affect the word bank or other players' sessions.
#[derive(Debug)]
pub enum GameError {
    /// The tier has no words; the round is abandoned and the session reset
    EmptyTier(Tier),
    /// The action does not apply in the session's current phase; nothing changed
    InvalidTransition { action: Action, phase: Phase },
    /// The persistence collaborator failed
    Store(StoreError),
}

impl GameError {
    /// Short message suitable for showing to the player
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyTier(tier) => format!("No words available for {tier} difficulty."),
            Self::InvalidTransition {
                action: Action::Submit,
                ..
            } => "No active puzzle. Start a new game.".to_string(),
            Self::InvalidTransition {
                action: Action::Start,
                ..
            } => "A game is already in progress.".to_string(),
            Self::Store(_) => "Could not save your progress.".to_string(),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTier(tier) => write!(f, "No words available for {tier} difficulty"),
            Self::InvalidTransition { action, phase } => {
                write!(f, "Cannot {action} while the session is {phase}")
            }
            Self::Store(e) => write!(f, "Store error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::EmptyTier(_) | Self::InvalidTransition { .. } => None,
        }
    }
}

impl From<StoreError> for GameError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
