//! Display functions for command results
//!
//! Each `write_*` function renders to any writer; the `print_*` wrappers send
//! the same text to stdout.

use super::formatters::{attempt_pips, create_progress_bar, letter_tiles};
use crate::commands::{AuditResult, ScoreHistory, TierOutcome, TurnOutcome};
use crate::game::{MAX_ATTEMPTS, Phase, Session, TurnEvent};
use colored::Colorize;
use std::io::{self, Write};

/// Render the visible state of a session
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_session<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Difficulty: {}   Points: {}   Tries: {}",
        session.tier().to_string().bright_cyan(),
        session.points().to_string().bright_yellow().bold(),
        attempt_pips(session.attempts_remaining(), MAX_ATTEMPTS)
    )?;
    if let Some(pending) = session.pending_tier() {
        writeln!(out, "{}", format!("Next game: {pending}").dimmed())?;
    }
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    match (session.phase(), session.puzzle()) {
        (Phase::Active, Some(puzzle)) => {
            writeln!(
                out,
                "\nUnscramble: {}",
                letter_tiles(puzzle.scrambled()).bright_yellow().bold()
            )?;
            writeln!(out, "Hint:       {}", puzzle.definition().italic())?;
            writeln!(out, "Worth:      {} points\n", puzzle.score())?;
        }
        (Phase::GameOver, _) => {
            writeln!(out, "\n{}\n", "Game over. Start a new game to play again.".red())?;
        }
        _ => {
            writeln!(out, "\n{}\n", "No active puzzle. Start a new game.".dimmed())?;
        }
    }
    Ok(())
}

/// Render the result of one turn, followed by the session
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_turn<W: Write>(out: &mut W, outcome: &TurnOutcome) -> io::Result<()> {
    if let Some(notice) = &outcome.notice {
        writeln!(out, "{}", notice.yellow())?;
    }

    if let Some(event) = &outcome.event {
        match event {
            TurnEvent::Started => writeln!(out, "{}", "New game started!".green().bold())?,
            TurnEvent::Correct { .. } => {
                if let Some(msg) = event.message() {
                    writeln!(out, "{}", format!("✅ {msg}").green().bold())?;
                }
            }
            TurnEvent::Incorrect { .. } => {
                if let Some(msg) = event.message() {
                    writeln!(out, "{}", format!("❌ {msg}").red())?;
                }
            }
            TurnEvent::GameOver(report) => {
                writeln!(
                    out,
                    "The word was {}.",
                    report.word.to_uppercase().bright_yellow().bold()
                )?;
                if let Some(msg) = event.message() {
                    let line = if report.new_high_score.is_some() {
                        format!("🏆 {msg}").bright_green().bold()
                    } else {
                        msg.bold()
                    };
                    writeln!(out, "{line}")?;
                }
            }
        }
    }

    write_session(out, &outcome.session)
}

/// Render a tier change
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_tier_outcome<W: Write>(out: &mut W, outcome: &TierOutcome) -> io::Result<()> {
    let msg = outcome.message();
    match outcome {
        TierOutcome::Set { .. } => writeln!(out, "{}", msg.green()),
        TierOutcome::Rejected { .. } => writeln!(out, "{}", msg.red()),
    }
}

/// Render a player's score history
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_scores<W: Write>(out: &mut W, history: &ScoreHistory) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {}",
        "SCORES:".bright_cyan().bold(),
        history.player.bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    if history.records.is_empty() {
        writeln!(out, "\nNo finished games yet.")?;
        return Ok(());
    }

    writeln!(out, "\n{}", "Best by difficulty:".bold())?;
    for (tier, points) in &history.best {
        writeln!(out, "  {:<10} {:>6}", tier.to_string(), points)?;
    }

    writeln!(out, "\n{}", "Games:".bold())?;
    for (i, record) in history.records.iter().enumerate() {
        writeln!(
            out,
            "  {:>3}. {:>6} pts  {:<10} {}",
            i + 1,
            record.points,
            record.tier.to_string(),
            record.timestamp.format("%Y-%m-%d %H:%M")
        )?;
    }
    Ok(())
}

/// Render the result of a scramble audit
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_audit<W: Write>(out: &mut W, result: &AuditResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "SCRAMBLE AUDIT".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    for audit in &result.tiers {
        let status = if audit.passed() {
            "ok".green().bold()
        } else {
            "FAILED".red().bold()
        };
        writeln!(
            out,
            "\n{} ({} words, {} scrambles): {status}",
            audit.tier.to_string().bright_yellow().bold(),
            audit.words,
            audit.samples
        )?;
        if audit.words == 0 {
            continue;
        }
        writeln!(out, "  Not a permutation: {}", audit.violations)?;
        writeln!(out, "  Unchanged:         {}", audit.identities)?;
        writeln!(
            out,
            "  Letters in place:  {} {:.3} (expected {:.3})",
            create_progress_bar(audit.observed_fixed, 1.0, 20).cyan(),
            audit.observed_fixed,
            audit.expected_fixed
        )?;
    }

    writeln!(
        out,
        "\nSeed {} | {:.2}s",
        result.seed,
        result.duration.as_secs_f64()
    )?;
    Ok(())
}

/// Print the result of one turn
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_turn(outcome: &TurnOutcome) -> io::Result<()> {
    write_turn(&mut io::stdout().lock(), outcome)
}

/// Print a tier change
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_tier_outcome(outcome: &TierOutcome) -> io::Result<()> {
    write_tier_outcome(&mut io::stdout().lock(), outcome)
}

/// Print a player's score history
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_scores(history: &ScoreHistory) -> io::Result<()> {
    write_scores(&mut io::stdout().lock(), history)
}

/// Print the result of a scramble audit
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_audit(result: &AuditResult) -> io::Result<()> {
    write_audit(&mut io::stdout().lock(), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tier, WordEntry};
    use crate::game::WordBank;
    use crate::store::ScoreRecord;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeMap;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn active_session() -> Session {
        let bank = WordBank::partial(vec![
            WordEntry::new("cat", "A small feline", Tier::Easy, 5).unwrap(),
        ]);
        let mut session = Session::new(Tier::Easy);
        session.start(&bank, &mut StdRng::seed_from_u64(5)).unwrap();
        session
    }

    #[test]
    fn session_shows_puzzle_and_hint() {
        let text = render(|out| write_session(out, &active_session()));
        assert!(text.contains("Hint:       A small feline"));
        assert!(text.contains("Worth:      5 points"));
        assert!(text.contains("●●●"));
        assert!(text.contains("easy"));
    }

    #[test]
    fn idle_session_prompts_for_new_game() {
        let text = render(|out| write_session(out, &Session::new(Tier::Hard)));
        assert!(text.contains("No active puzzle. Start a new game."));
        assert!(text.contains("○○○"));
    }

    #[test]
    fn notice_is_rendered() {
        let outcome = TurnOutcome {
            session: Session::default(),
            event: None,
            notice: Some("No active puzzle. Start a new game.".to_string()),
        };
        let text = render(|out| write_turn(out, &outcome));
        assert!(text.starts_with("No active puzzle. Start a new game."));
    }

    #[test]
    fn incorrect_turn_shows_message() {
        let outcome = TurnOutcome {
            session: active_session(),
            event: Some(TurnEvent::Incorrect {
                attempts_remaining: 2,
            }),
            notice: None,
        };
        let text = render(|out| write_turn(out, &outcome));
        assert!(text.contains("wrong! 2 more tries."));
    }

    #[test]
    fn empty_history() {
        let history = ScoreHistory {
            player: "ada".to_string(),
            records: Vec::new(),
            best: BTreeMap::new(),
        };
        let text = render(|out| write_scores(out, &history));
        assert!(text.contains("No finished games yet."));
    }

    #[test]
    fn history_lists_games() {
        let history = ScoreHistory {
            player: "ada".to_string(),
            records: vec![ScoreRecord {
                points: 25,
                tier: Tier::Hard,
                timestamp: Utc::now(),
            }],
            best: BTreeMap::from([(Tier::Hard, 25)]),
        };
        let text = render(|out| write_scores(out, &history));
        assert!(text.contains("25 pts"));
        assert!(text.contains("hard"));
    }
}
