//! Word Scramble - CLI
//!
//! Unscramble dictionary words before your three tries run out. Plays as a
//! full screen TUI, a line based REPL, or one turn per invocation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use word_scramble::{
    commands::{
        TurnCommand, change_tier, run_audit, run_simple, run_turn, score_history,
    },
    core::{Player, Tier},
    game::{Engine, WordBank},
    logging,
    output::{print_audit, print_scores, print_tier_outcome, print_turn},
    store::JsonStore,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "scramble",
    about = "Word scramble game: unscramble the word before your tries run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player name; 'guest' plays without recording scores
    #[arg(short, long, global = true, env = "SCRAMBLE_PLAYER", default_value = "guest")]
    player: String,

    /// Store file (default: platform data directory)
    #[arg(short, long, global = true, env = "SCRAMBLE_STORE")]
    store: Option<PathBuf>,

    /// Dictionary file of tab separated tier, word, score, definition
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line based, no TUI)
    Simple,

    /// Start a new game, abandoning any game in progress
    Start,

    /// Guess the current word
    Guess {
        /// Your answer
        answer: String,
    },

    /// Show the current puzzle and score
    Show,

    /// Abandon the current game
    Reset,

    /// Show or set the difficulty: easy, standard, hard, expert
    Tier {
        /// New difficulty
        name: Option<String>,
    },

    /// Show score history
    Scores {
        /// Only this difficulty
        #[arg(short, long)]
        tier: Option<Tier>,
    },

    /// Check scramble quality over the dictionary
    Audit {
        /// Scrambles per word
        #[arg(short = 'n', long, default_value = "2000")]
        samples: usize,

        /// Only this difficulty
        #[arg(short, long)]
        tier: Option<Tier>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the word bank from `--words` or the embedded dictionary
fn load_bank(words: Option<&Path>) -> Result<WordBank> {
    match words {
        Some(path) => {
            let entries = load_from_file(path)
                .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
            Ok(WordBank::new(entries)?)
        }
        None => Ok(WordBank::embedded()?),
    }
}

fn open_store(path: Option<PathBuf>) -> Result<JsonStore> {
    let path = path.unwrap_or_else(JsonStore::default_path);
    debug!(path = %path.display(), "Opening store");
    JsonStore::open(&path).with_context(|| format!("Failed to open store {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let bank = load_bank(cli.words.as_deref())?;
    let player = Player::from_name(&cli.player);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let store = open_store(cli.store)?;
    let mut engine = Engine::new(&bank, store);

    match command {
        Commands::Play => run_play_command(engine, player),
        Commands::Simple => {
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            run_simple(&mut engine, &player, &mut rand::rng(), stdin, &mut stdout)
        }
        Commands::Start => turn_command(&mut engine, &player, &TurnCommand::Start),
        Commands::Guess { answer } => {
            turn_command(&mut engine, &player, &TurnCommand::Guess(answer))
        }
        Commands::Show => turn_command(&mut engine, &player, &TurnCommand::Show),
        Commands::Reset => turn_command(&mut engine, &player, &TurnCommand::Reset),
        Commands::Tier { name: Some(name) } => {
            let outcome = change_tier(&mut engine, &player, &name)?;
            print_tier_outcome(&outcome)?;
            Ok(())
        }
        Commands::Tier { name: None } => {
            println!("Difficulty: {}", engine.tier(&player)?);
            Ok(())
        }
        Commands::Scores { tier } => {
            let history = score_history(engine.store(), &player, tier)?;
            print_scores(&history)?;
            Ok(())
        }
        Commands::Audit {
            samples,
            tier,
            seed,
        } => run_audit_command(engine.bank(), samples, tier, seed),
    }
}

fn run_audit_command(
    bank: &WordBank,
    samples: usize,
    tier: Option<Tier>,
    seed: Option<u64>,
) -> Result<()> {
    let tiers = tier.map_or_else(|| Tier::ALL.to_vec(), |t| vec![t]);
    let result = run_audit(bank, &tiers, samples, seed, true);
    print_audit(&result)?;
    if !result.passed() {
        anyhow::bail!("Scramble audit found bad scrambles");
    }
    Ok(())
}

fn turn_command(
    engine: &mut Engine<'_, JsonStore>,
    player: &Player,
    command: &TurnCommand,
) -> Result<()> {
    let outcome = run_turn(engine, player, command, &mut rand::rng())?;
    print_turn(&outcome)?;
    Ok(())
}

fn run_play_command(engine: Engine<'_, JsonStore>, player: Player) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(engine, player, StdRng::from_rng(&mut rand::rng()))?;
    run_tui(app)
}
