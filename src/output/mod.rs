//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit, print_scores, print_tier_outcome, print_turn, write_audit, write_scores,
    write_session, write_tier_outcome, write_turn,
};
