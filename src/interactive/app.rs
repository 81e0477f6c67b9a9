//! TUI application state and logic

use crate::commands::{TierOutcome, TurnCommand, change_tier, run_turn};
use crate::core::{Player, Tier};
use crate::game::{Engine, GameReport, Phase, Session, TurnEvent};
use crate::store::{ScoreStore, SessionCarrier};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest answer the input box accepts
const MAX_INPUT: usize = 32;

/// Application state
pub struct App<'a, S> {
    pub engine: Engine<'a, S>,
    pub player: Player,
    rng: StdRng,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub history: Vec<HistoryEntry>,
    pub last_report: Option<GameReport>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// One judged guess
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub scrambled: String,
    pub guess: String,
    pub correct: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Tallies for this sitting
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub words_solved: usize,
    pub best_points: u32,
}

impl<'a, S: ScoreStore + SessionCarrier> App<'a, S> {
    /// Build the app and load the player's session
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be loaded.
    pub fn new(engine: Engine<'a, S>, player: Player, rng: StdRng) -> Result<Self> {
        let session = engine.session(&player)?;
        let mut app = Self {
            engine,
            player,
            rng,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            history: Vec::new(),
            last_report: None,
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            &format!("Welcome, {}! Unscramble the word before your tries run out.", app.player),
            MessageStyle::Info,
        );
        if app.session.phase() != Phase::Active {
            app.add_message("Press Enter to start a game.", MessageStyle::Info);
        }
        Ok(app)
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.session.pending_tier().unwrap_or(self.session.tier())
    }

    /// Run one turn and fold its outcome into the app
    fn apply(&mut self, command: &TurnCommand) -> Result<()> {
        let scrambled = self
            .session
            .puzzle()
            .map(|p| p.scrambled().to_string())
            .unwrap_or_default();
        let outcome = run_turn(&mut self.engine, &self.player, command, &mut self.rng)?;
        self.session = outcome.session;

        if let Some(notice) = outcome.notice {
            self.add_message(&notice, MessageStyle::Error);
        }

        let Some(event) = outcome.event else {
            return Ok(());
        };

        if let TurnCommand::Guess(guess) = command {
            self.history.push(HistoryEntry {
                scrambled,
                guess: guess.clone(),
                correct: matches!(event, TurnEvent::Correct { .. }),
            });
        }

        match &event {
            TurnEvent::Started => {
                self.history.clear();
                self.last_report = None;
                self.add_message("New game started!", MessageStyle::Info);
            }
            TurnEvent::Correct { .. } => {
                self.stats.words_solved += 1;
                if let Some(msg) = event.message() {
                    self.add_message(&msg, MessageStyle::Success);
                }
            }
            TurnEvent::Incorrect { .. } => {
                if let Some(msg) = event.message() {
                    self.add_message(&msg, MessageStyle::Error);
                }
            }
            TurnEvent::GameOver(report) => {
                self.stats.games_played += 1;
                self.stats.best_points = self.stats.best_points.max(report.points);
                self.add_message(
                    &format!("The word was {}.", report.word.to_uppercase()),
                    MessageStyle::Info,
                );
                if let Some(msg) = event.message() {
                    let style = if report.new_high_score.is_some() {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Info
                    };
                    self.add_message(&msg, style);
                }
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.last_report = Some(report.clone());
            }
        }
        Ok(())
    }

    /// Abandon any game and start a fresh one
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn new_game(&mut self) -> Result<()> {
        self.input_buffer.clear();
        self.apply(&TurnCommand::Start)
    }

    /// Submit whatever is in the input box
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn submit_guess(&mut self) -> Result<()> {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.trim().is_empty() {
            self.add_message("Type an answer first!", MessageStyle::Error);
            return Ok(());
        }
        self.apply(&TurnCommand::Guess(guess))
    }

    /// Switch to the next tier
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn cycle_tier(&mut self) -> Result<()> {
        let current = self.tier();
        let index = Tier::ALL.iter().position(|&t| t == current).unwrap_or(0);
        let next = Tier::ALL[(index + 1) % Tier::ALL.len()];

        let outcome = change_tier(&mut self.engine, &self.player, next.name())?;
        self.session = self.engine.session(&self.player)?;
        let style = match outcome {
            TierOutcome::Set { .. } => MessageStyle::Info,
            TierOutcome::Rejected { .. } => MessageStyle::Error,
        };
        self.add_message(&outcome.message(), style);
        Ok(())
    }

    /// React to one key press
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return Ok(());
        }

        match self.session.phase() {
            Phase::Active => match key.code {
                KeyCode::Char(c) if c.is_alphabetic() => {
                    if self.input_buffer.chars().count() < MAX_INPUT {
                        self.input_buffer.extend(c.to_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess()?,
                KeyCode::Tab => self.cycle_tier()?,
                _ => {}
            },
            Phase::NoPuzzle | Phase::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game()?,
                KeyCode::Tab => self.cycle_tier()?,
                _ => {}
            },
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: ScoreStore + SessionCarrier>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<'_, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: ScoreStore + SessionCarrier,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::game::WordBank;
    use crate::store::MemoryStore;
    use rand::SeedableRng;

    fn cat_bank() -> WordBank {
        WordBank::partial(vec![
            WordEntry::new("cat", "feline", Tier::Easy, 5).unwrap(),
        ])
    }

    fn new_app(bank: &WordBank) -> App<'_, MemoryStore> {
        let mut store = MemoryStore::new();
        store.set_saved_tier("ada", Tier::Easy).unwrap();
        let engine = Engine::new(bank, store);
        App::new(engine, Player::from_name("ada"), StdRng::seed_from_u64(4)).unwrap()
    }

    fn press(app: &mut App<'_, MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_word(app: &mut App<'_, MemoryStore>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn enter_starts_a_game() {
        let bank = cat_bank();
        let mut app = new_app(&bank);
        assert_eq!(app.session.phase(), Phase::NoPuzzle);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.phase(), Phase::Active);
        assert_eq!(app.session.tier(), Tier::Easy);
    }

    #[test]
    fn typed_guess_is_judged() {
        let bank = cat_bank();
        let mut app = new_app(&bank);
        press(&mut app, KeyCode::Enter);

        type_word(&mut app, "CAT");
        assert_eq!(app.session.points(), 5);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.history.len(), 1);
        assert!(app.history[0].correct);
        assert_eq!(app.stats.words_solved, 1);
    }

    #[test]
    fn three_misses_end_the_game() {
        let bank = cat_bank();
        let mut app = new_app(&bank);
        press(&mut app, KeyCode::Enter);

        for _ in 0..3 {
            type_word(&mut app, "dog");
        }
        assert_eq!(app.session.phase(), Phase::GameOver);
        let report = app.last_report.as_ref().unwrap();
        assert_eq!(report.points, 0);
        assert_eq!(report.word, "cat");
        assert_eq!(app.stats.games_played, 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.phase(), Phase::Active);
        assert!(app.history.is_empty());
    }

    #[test]
    fn non_letters_are_ignored() {
        let bank = cat_bank();
        let mut app = new_app(&bank);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('B'));
        assert_eq!(app.input_buffer, "ab");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "a");
    }

    #[test]
    fn empty_submit_is_not_a_guess() {
        let bank = cat_bank();
        let mut app = new_app(&bank);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.attempts_remaining(), 3);
        assert!(app.history.is_empty());
    }

    #[test]
    fn tab_cycles_tier_and_defers_during_a_game() {
        let bank = cat_bank();
        let mut app = new_app(&bank);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.tier(), Tier::Standard);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.tier(), Tier::Easy);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.tier(), Tier::Easy);
        assert_eq!(app.tier(), Tier::Standard);
    }

    #[test]
    fn empty_tier_shows_notice() {
        let bank = cat_bank();
        let mut app = new_app(&bank);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.phase(), Phase::NoPuzzle);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "No words available for standard difficulty.");
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let bank = cat_bank();
        let mut app = new_app(&bank);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);

        let mut app = new_app(&bank);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let bank = cat_bank();
        let mut app = new_app(&bank);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
