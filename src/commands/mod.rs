//! Command implementations

pub mod audit;
pub mod profile;
pub mod simple;
pub mod turn;

pub use audit::{AuditResult, TierAudit, run_audit};
pub use profile::{ScoreHistory, TierOutcome, change_tier, score_history};
pub use simple::run_simple;
pub use turn::{TurnCommand, TurnOutcome, run_turn};
