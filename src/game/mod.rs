//! Gameplay engine
//!
//! The word bank, the three pure steps of a round (select, scramble, match),
//! the per-player session state machine, and the engine that drives one turn
//! against the persistence collaborator.

mod bank;
mod engine;
mod error;
mod matcher;
mod scrambler;
mod selector;
mod session;

pub use bank::{BankError, WordBank};
pub use engine::{Engine, GameReport, Turn, TurnEvent};
pub use error::{Action, GameError};
pub use matcher::matches;
pub use scrambler::{
    expected_fixed_fraction, fixed_points, has_distinct_arrangement, is_permutation, scramble,
};
pub use selector::select;
pub use session::{Judgement, MAX_ATTEMPTS, Phase, Session, TierChange};
