//! Dictionaries for the scramble game
//!
//! Provides the embedded dictionary compiled into the binary and a loader for custom files.

mod embedded;
pub mod loader;

pub use embedded::{ENTRIES, ENTRIES_COUNT};
