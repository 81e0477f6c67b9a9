//! Core domain types for the scramble game
//!
//! This module contains the fundamental domain values with no I/O.
//! All types here are pure, testable, and validated on construction.

mod entry;
mod player;
mod puzzle;
mod tier;

pub use entry::{EntryError, WordEntry};
pub use player::Player;
pub use puzzle::Puzzle;
pub use tier::{Tier, TierError};
