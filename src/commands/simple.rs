//! Simple interactive CLI mode
//!
//! Line based play without the TUI. Reads commands and guesses from any
//! reader so the loop can be driven from a script.

use super::profile::{change_tier, score_history};
use super::turn::{TurnCommand, run_turn};
use crate::core::Player;
use crate::game::Engine;
use crate::output::{write_scores, write_tier_outcome, write_turn};
use crate::store::{ScoreStore, SessionCarrier};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

const HELP: &str =
    "Type your answer to guess. Commands: :new, :show, :reset, :tier <difficulty>, :scores, :help, :quit";

/// Parsed line of input
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Turn(TurnCommand),
    Tier(&'a str),
    Scores,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Option<Input<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let Some(command) = line.strip_prefix(':') else {
        return Some(Input::Turn(TurnCommand::Guess(line.to_string())));
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(n, a)| (n, a.trim()));

    Some(match name {
        "new" | "n" => Input::Turn(TurnCommand::Start),
        "show" | "s" => Input::Turn(TurnCommand::Show),
        "reset" => Input::Turn(TurnCommand::Reset),
        "tier" | "t" => Input::Tier(arg),
        "scores" => Input::Scores,
        "help" | "h" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ => Input::Unknown(command),
    })
}

/// Run the simple interactive CLI mode
///
/// Stops at `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if input or output fails, or the store cannot be read or
/// written.
pub fn run_simple<S, R, I, O>(
    engine: &mut Engine<'_, S>,
    player: &Player,
    rng: &mut R,
    input: I,
    out: &mut O,
) -> Result<()>
where
    S: ScoreStore + SessionCarrier,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Word Scramble - Interactive Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Playing as {player}. {HELP}\n")?;

    let outcome = run_turn(engine, player, &TurnCommand::Show, rng)?;
    write_turn(out, &outcome)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match parse_input(&line) {
            None => {}
            Some(Input::Turn(command)) => {
                let outcome = run_turn(engine, player, &command, rng)?;
                write_turn(out, &outcome)?;
            }
            Some(Input::Tier(name)) => {
                let outcome = change_tier(engine, player, name)?;
                write_tier_outcome(out, &outcome)?;
            }
            Some(Input::Scores) => {
                let history = score_history(engine.store(), player, None)?;
                write_scores(out, &history)?;
            }
            Some(Input::Help) => writeln!(out, "{HELP}")?,
            Some(Input::Quit) => break,
            Some(Input::Unknown(command)) => {
                writeln!(out, "Unknown command ':{command}'. {HELP}")?;
            }
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}
