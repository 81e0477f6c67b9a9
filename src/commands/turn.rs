//! Single turn commands
//!
//! Wraps the engine so that every game-level failure becomes a short notice
//! for the player instead of an error. Only storage failures propagate.

use crate::core::Player;
use crate::game::{Engine, GameError, Session, TurnEvent};
use crate::store::{ScoreStore, SessionCarrier, StoreError};
use rand::Rng;
use tracing::debug;

/// One player request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnCommand {
    /// Begin a fresh game
    Start,
    /// Submit an answer for the current puzzle
    Guess(String),
    /// Look at the session without changing it
    Show,
    /// Abandon the game
    Reset,
}

/// What the player should see after a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub session: Session,
    pub event: Option<TurnEvent>,
    /// Set when the request could not be carried out
    pub notice: Option<String>,
}

/// Run one turn for a player
///
/// # Errors
///
/// Returns `StoreError` if the session or score store cannot be read or written.
pub fn run_turn<S, R>(
    engine: &mut Engine<'_, S>,
    player: &Player,
    command: &TurnCommand,
    rng: &mut R,
) -> Result<TurnOutcome, StoreError>
where
    S: ScoreStore + SessionCarrier,
    R: Rng + ?Sized,
{
    debug!(?command, %player, "Running turn");

    let result = match command {
        TurnCommand::Start => engine.start(player, rng).map(|t| (t.session, Some(t.event))),
        TurnCommand::Guess(answer) => engine
            .submit(player, answer, rng)
            .map(|t| (t.session, Some(t.event))),
        TurnCommand::Show => engine
            .session(player)
            .map(|s| (s, None))
            .map_err(GameError::from),
        TurnCommand::Reset => engine
            .reset(player)
            .map(|s| (s, None))
            .map_err(GameError::from),
    };

    match result {
        Ok((session, event)) => Ok(TurnOutcome {
            session,
            event,
            notice: None,
        }),
        Err(GameError::Store(e)) => Err(e),
        Err(e) => Ok(TurnOutcome {
            session: engine.session(player)?,
            event: None,
            notice: Some(e.user_message()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tier, WordEntry};
    use crate::game::{Phase, WordBank};
    use crate::store::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> WordBank {
        WordBank::partial(vec![
            WordEntry::new("cat", "feline", Tier::Easy, 5).unwrap(),
        ])
    }

    #[test]
    fn guess_without_game_gives_notice() {
        let bank = bank();
        let mut engine = Engine::new(&bank, MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(1);

        let outcome = run_turn(
            &mut engine,
            &Player::Guest,
            &TurnCommand::Guess("cat".into()),
            &mut rng,
        )
        .unwrap();
        assert_eq!(
            outcome.notice.as_deref(),
            Some("No active puzzle. Start a new game.")
        );
        assert_eq!(outcome.event, None);
        assert_eq!(outcome.session.phase(), Phase::NoPuzzle);
    }

    #[test]
    fn empty_tier_gives_notice_and_reset_session() {
        let bank = bank();
        let mut engine = Engine::new(&bank, MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(2);

        let outcome = run_turn(&mut engine, &Player::Guest, &TurnCommand::Start, &mut rng).unwrap();
        assert_eq!(
            outcome.notice.as_deref(),
            Some("No words available for standard difficulty.")
        );
        assert_eq!(outcome.session.phase(), Phase::NoPuzzle);
    }

    #[test]
    fn start_guess_show_reset() {
        let bank = bank();
        let mut engine = Engine::new(&bank, MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(3);
        let player = Player::from_name("ada");
        engine.set_tier(&player, Tier::Easy).unwrap();

        let started = run_turn(&mut engine, &player, &TurnCommand::Start, &mut rng).unwrap();
        assert_eq!(started.event, Some(TurnEvent::Started));

        let guessed = run_turn(
            &mut engine,
            &player,
            &TurnCommand::Guess("Cat".into()),
            &mut rng,
        )
        .unwrap();
        assert_eq!(guessed.event, Some(TurnEvent::Correct { awarded: 5 }));

        let shown = run_turn(&mut engine, &player, &TurnCommand::Show, &mut rng).unwrap();
        assert_eq!(shown.session, guessed.session);
        assert_eq!(shown.event, None);

        let reset = run_turn(&mut engine, &player, &TurnCommand::Reset, &mut rng).unwrap();
        assert_eq!(reset.session.phase(), Phase::NoPuzzle);
        assert_eq!(reset.session.points(), 0);
    }
}
