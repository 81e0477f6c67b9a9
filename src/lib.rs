//! Word Scramble
//!
//! A single-player word game: a dictionary word is shown with its letters
//! scrambled, the player has three tries to recover it, and points accumulate
//! by each word's difficulty weight until the tries run out.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_scramble::core::{Player, Tier};
//! use word_scramble::game::{Engine, TurnEvent, WordBank};
//! use word_scramble::store::MemoryStore;
//!
//! let bank = WordBank::embedded().unwrap();
//! let mut engine = Engine::new(&bank, MemoryStore::new());
//! let mut rng = StdRng::seed_from_u64(7);
//! let player = Player::from_name("ada");
//!
//! engine.set_tier(&player, Tier::Easy).unwrap();
//! let turn = engine.start(&player, &mut rng).unwrap();
//! let answer = turn.puzzle().unwrap().original().to_string();
//!
//! let turn = engine.submit(&player, &answer, &mut rng).unwrap();
//! assert!(matches!(turn.event, TurnEvent::Correct { .. }));
//! ```

// Core domain types
pub mod core;

// Gameplay engine
pub mod game;

// Persistence collaborators
pub mod store;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
