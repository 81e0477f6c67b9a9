//! End to end games through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::commands::{TurnCommand, run_turn};
use word_scramble::core::{Player, Tier, WordEntry};
use word_scramble::game::{Engine, GameError, Phase, TurnEvent, WordBank, is_permutation};
use word_scramble::store::{JsonStore, MemoryStore, ScoreStore, SessionCarrier};

fn cat_bank() -> WordBank {
    WordBank::partial(vec![
        WordEntry::new("cat", "A small domesticated feline", Tier::Easy, 5).unwrap(),
    ])
}

#[test]
fn one_word_pool_plays_to_game_over() {
    let bank = cat_bank();
    let mut engine = Engine::new(&bank, MemoryStore::new());
    let mut rng = StdRng::seed_from_u64(42);
    let player = Player::from_name("ada");
    engine.set_tier(&player, Tier::Easy).unwrap();

    let turn = engine.start(&player, &mut rng).unwrap();
    let puzzle = turn.puzzle().unwrap();
    assert_ne!(puzzle.scrambled(), "cat");
    assert!(is_permutation(puzzle.scrambled(), "cat"));

    let turn = engine.submit(&player, " CAT ", &mut rng).unwrap();
    assert_eq!(turn.event, TurnEvent::Correct { awarded: 5 });
    assert_eq!(turn.session.points(), 5);

    let turn = engine.submit(&player, "dog", &mut rng).unwrap();
    assert_eq!(
        turn.event,
        TurnEvent::Incorrect {
            attempts_remaining: 2
        }
    );
    assert_eq!(turn.session.points(), 5);

    engine.submit(&player, "dog", &mut rng).unwrap();
    let turn = engine.submit(&player, "dog", &mut rng).unwrap();
    let TurnEvent::GameOver(report) = &turn.event else {
        panic!("expected game over, got {:?}", turn.event);
    };
    assert_eq!(report.points, 5);
    assert_eq!(report.new_high_score, Some(5));
    assert_eq!(turn.session.phase(), Phase::GameOver);

    let store = engine.into_store();
    assert_eq!(store.high_score("ada", Tier::Easy).unwrap(), 5);
    assert_eq!(store.scores("ada").unwrap().len(), 1);
}

#[test]
fn lower_score_keeps_high_score() {
    let bank = cat_bank();
    let mut engine = Engine::new(&bank, MemoryStore::new());
    let mut rng = StdRng::seed_from_u64(3);
    let player = Player::from_name("ada");
    engine.set_tier(&player, Tier::Easy).unwrap();

    engine.start(&player, &mut rng).unwrap();
    engine.submit(&player, "cat", &mut rng).unwrap();
    engine.submit(&player, "cat", &mut rng).unwrap();
    for _ in 0..3 {
        engine.submit(&player, "x", &mut rng).unwrap();
    }

    engine.start(&player, &mut rng).unwrap();
    engine.submit(&player, "cat", &mut rng).unwrap();
    engine.submit(&player, "x", &mut rng).unwrap();
    engine.submit(&player, "x", &mut rng).unwrap();
    let turn = engine.submit(&player, "x", &mut rng).unwrap();
    let TurnEvent::GameOver(report) = turn.event else {
        panic!("expected game over");
    };
    assert_eq!(report.points, 5);
    assert_eq!(report.new_high_score, None);
    assert_eq!(
        TurnEvent::GameOver(report).message().as_deref(),
        Some("Game over! Final score: 5 points.")
    );

    let store = engine.into_store();
    assert_eq!(store.high_score("ada", Tier::Easy).unwrap(), 10);
    assert_eq!(store.scores("ada").unwrap().len(), 2);
}

#[test]
fn empty_tier_aborts_the_round() {
    let bank = cat_bank();
    let mut engine = Engine::new(&bank, MemoryStore::new());
    let mut rng = StdRng::seed_from_u64(1);
    let player = Player::from_name("ada");
    engine.set_tier(&player, Tier::Expert).unwrap();

    let err = engine.start(&player, &mut rng).unwrap_err();
    assert!(matches!(err, GameError::EmptyTier(Tier::Expert)));
    assert_eq!(engine.session(&player).unwrap().phase(), Phase::NoPuzzle);
}

#[test]
fn json_store_carries_session_between_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let bank = cat_bank();
    let player = Player::from_name("ada");

    // Each block is one CLI invocation
    let scrambled = {
        let mut engine = Engine::new(&bank, JsonStore::open(&path).unwrap());
        engine.set_tier(&player, Tier::Easy).unwrap();
        let outcome = run_turn(
            &mut engine,
            &player,
            &TurnCommand::Start,
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
        outcome.session.puzzle().unwrap().scrambled().to_string()
    };

    {
        let mut engine = Engine::new(&bank, JsonStore::open(&path).unwrap());
        let shown = run_turn(
            &mut engine,
            &player,
            &TurnCommand::Show,
            &mut StdRng::seed_from_u64(6),
        )
        .unwrap();
        assert_eq!(shown.session.puzzle().unwrap().scrambled(), scrambled);

        let guessed = run_turn(
            &mut engine,
            &player,
            &TurnCommand::Guess("cat".into()),
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();
        assert_eq!(guessed.event, Some(TurnEvent::Correct { awarded: 5 }));
    }

    let store = JsonStore::open(&path).unwrap();
    let session = store.load_session("ada").unwrap().unwrap();
    assert_eq!(session.points(), 5);
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(store.saved_tier("ada").unwrap(), Some(Tier::Easy));
}

#[test]
fn guests_are_not_recorded() {
    let bank = cat_bank();
    let mut engine = Engine::new(&bank, MemoryStore::new());
    let mut rng = StdRng::seed_from_u64(8);
    engine.set_tier(&Player::Guest, Tier::Easy).unwrap();

    engine.start(&Player::Guest, &mut rng).unwrap();
    engine.submit(&Player::Guest, "cat", &mut rng).unwrap();
    for _ in 0..2 {
        engine.submit(&Player::Guest, "no", &mut rng).unwrap();
    }
    let turn = engine.submit(&Player::Guest, "no", &mut rng).unwrap();
    let TurnEvent::GameOver(report) = turn.event else {
        panic!("expected game over");
    };
    assert_eq!(report.points, 5);
    assert_eq!(report.new_high_score, None);

    let store = engine.into_store();
    assert_eq!(store.high_score("guest", Tier::Easy).unwrap(), 0);
    assert!(store.scores("guest").unwrap().is_empty());
}

#[test]
fn embedded_dictionary_has_every_tier() {
    let bank = WordBank::embedded().unwrap();
    for tier in Tier::ALL {
        assert!(!bank.words_for(tier).is_empty(), "{tier} is empty");
    }
}
