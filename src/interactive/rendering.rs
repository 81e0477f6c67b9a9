//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::game::{MAX_ATTEMPTS, Phase};
use crate::output::formatters::letter_tiles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD SCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_puzzle<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let block = Block::default()
        .title(" Puzzle ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match (app.session.phase(), app.session.puzzle()) {
        (Phase::Active, Some(puzzle)) => vec![
            Line::from(""),
            Line::from(Span::styled(
                letter_tiles(puzzle.scrambled()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(vec![
                Span::raw("Hint:  "),
                Span::styled(
                    puzzle.definition().to_string(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ),
            ]),
            Line::from(format!("Worth: {} points", puzzle.score())),
        ],
        (Phase::GameOver, _) => {
            let mut lines = vec![Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))];
            if let Some(report) = &app.last_report {
                lines.push(Line::from(format!(
                    "The word was {}.",
                    report.word.to_uppercase()
                )));
                lines.push(Line::from(format!("Final score: {} points", report.points)));
                if report.new_high_score.is_some() {
                    lines.push(Line::from(Span::styled(
                        format!("🏆 New best for {} difficulty!", report.tier),
                        Style::default().fg(Color::Green),
                    )));
                }
            }
            lines
        }
        _ => vec![Line::from("No active puzzle. Press Enter to start.")],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_history<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, entry)| {
            let (mark, color) = if entry.correct {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            ListItem::new(format!(
                "{}: {} → {} {mark}",
                app.history.len() - i,
                entry.scrambled.to_uppercase(),
                entry.guess.to_uppercase()
            ))
            .style(Style::default().fg(color))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_tries(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_tries<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let remaining = app.session.attempts_remaining().min(MAX_ATTEMPTS);
    let percent = u16::from(remaining) * 100 / u16::from(MAX_ATTEMPTS);
    let color = match remaining {
        0 | 1 => Color::Red,
        2 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

fn render_messages<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.session.phase() {
        Phase::Active => (
            " Your Answer | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        Phase::GameOver => (" Press 'n' for new game or 'q' to quit ", "", Color::Red),
        Phase::NoPuzzle => (" Press Enter to start ", "", Color::Cyan),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.player)).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let tier_text = match app.session.pending_tier() {
        Some(next) => format!("Difficulty: {} → {next}", app.session.tier()),
        None => format!("Difficulty: {}", app.session.tier()),
    };
    let tier = Paragraph::new(tier_text).alignment(Alignment::Center);
    f.render_widget(tier, chunks[1]);

    let points = Paragraph::new(format!(
        "Points: {} | Best: {}",
        app.session.points(),
        app.stats.best_points
    ))
    .alignment(Alignment::Center);
    f.render_widget(points, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Tab: Difficulty | n: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, Tier, WordEntry};
    use crate::game::{Engine, WordBank};
    use crate::store::{MemoryStore, ScoreStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_active_puzzle() {
        let bank = WordBank::partial(vec![
            WordEntry::new("cat", "feline", Tier::Easy, 5).unwrap(),
        ]);
        let mut store = MemoryStore::new();
        store.set_saved_tier("ada", Tier::Easy).unwrap();
        let engine = Engine::new(&bank, store);
        let mut app = App::new(engine, Player::from_name("ada"), StdRng::seed_from_u64(1)).unwrap();
        app.new_game().unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("WORD SCRAMBLE"));
        assert!(text.contains("Hint:  feline"));
        assert!(text.contains("Player: ada"));
        assert!(text.contains("3/3"));
    }

    #[test]
    fn draws_idle_prompt() {
        let bank = WordBank::default();
        let engine = Engine::new(&bank, MemoryStore::new());
        let app = App::new(engine, Player::Guest, StdRng::seed_from_u64(1)).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(screen(&terminal).contains("Press Enter to start"));
    }
}
