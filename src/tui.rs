//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringWord`: letters go into the input line, ENTER submits
//! - `ShowingAlert`: a rejected word's title and message are shown until any
//!   key dismisses them, then back to `EnteringWord`

use crate::game_state::{GameInterface, RoundView, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LENGTH: usize = 24;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    ShowingAlert { title: String, message: String },
}

/// What the TUI knows about the current round, copied from each `RoundView`.
#[derive(Debug, Default)]
struct RoundDisplay {
    root_word: String,
    words: Vec<String>,
    score: usize,
}

impl RoundDisplay {
    fn update(&mut self, round: &RoundView) {
        self.root_word = round.root_word.to_string();
        self.words = round.accepted_words.to_vec();
        self.score = round.score;
    }
}

/// Main TUI interface component.
///
/// Owns the terminal for its lifetime; raw mode and the alternate screen are
/// restored on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: RoundDisplay,
    current_input: String,
    state: TuiState,
    message: String,
    status: String,
}

fn restore_on_error<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        debug_log!("Terminal setup failed, restoring");
        restore();
    }
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        // Nothing owns the terminal yet, so Drop won't restore it
        let terminal = restore_on_error(setup_terminal(), || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
            let _ = disable_raw_mode();
        })?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            round: RoundDisplay::default(),
            current_input: String::new(),
            state: TuiState::EnteringWord,
            message: String::new(),
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let round = &self.round;
        let current_input = &self.current_input;
        let state = &self.state;
        let message = &self.message;
        let status = &self.status;

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Root word
                    Constraint::Length(3), // Input
                    Constraint::Min(6),    // Accepted words
                    Constraint::Length(4), // Message / alert
                    Constraint::Length(3), // Status
                    Constraint::Length(3), // Instructions
                ])
                .split(f.area());

            render_title(f, chunks[0], &round.root_word);
            render_input(f, chunks[1], current_input);
            render_words(f, chunks[2], &round.words);
            render_message(f, chunks[3], state, message);
            render_status(f, chunks[4], status, round.score);
            render_instructions(f, chunks[5], state);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        let Event::Key(key) = event else {
            debug_log!("handle_input() - Ignoring non-key event: {:?}", event);
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        match self.state {
            TuiState::EnteringWord => Ok(self.handle_word_input(key)),
            TuiState::ShowingAlert { .. } => Ok(self.handle_alert_input(key)),
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n' | 'N') => {
                    self.current_input.clear();
                    Some(UserAction::NewGame)
                }
                KeyCode::Char('c' | 'C') => Some(UserAction::Exit),
                _ => None,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Char(c)
                if c.is_alphabetic() && self.current_input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.message.clear();
                self.current_input.extend(c.to_lowercase());
            }
            KeyCode::Char(c) if !c.is_alphabetic() => {
                self.message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                let word = std::mem::take(&mut self.current_input);
                info_log!("handle_word_input() - submitting '{}'", word);
                return Some(UserAction::Submit(word));
            }
            KeyCode::Esc => return Some(UserAction::Exit),
            _ => {}
        }
        None
    }

    fn handle_alert_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.code == KeyCode::Esc {
            return Some(UserAction::Exit);
        }
        self.state = TuiState::EnteringWord;
        None
    }
}

fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("WORD SCRAMBLE  ", HEADER_STYLE),
        Span::styled(root_word.to_uppercase(), SUCCESS_STYLE),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_input(f: &mut Frame, area: Rect, current_input: &str) {
    let input = Paragraph::new(format!("{current_input}_"))
        .block(Block::default().title("Enter your word").borders(Borders::ALL));
    f.render_widget(input, area);
}

fn render_words(f: &mut Frame, area: Rect, words: &[String]) {
    let visible = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = words
        .iter()
        .take(visible)
        .map(|word| {
            Line::from(vec![
                Span::styled(format!(" {:>2} ", word.chars().count()), BADGE_STYLE),
                Span::raw(format!(" {word}")),
            ])
        })
        .collect();
    if words.len() > visible && visible > 0 {
        lines.pop();
        lines.push(Line::from(format!("  ... and {} more", words.len() - visible + 1)));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!("Your words ({})", words.len()))
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, area: Rect, state: &TuiState, message: &str) {
    let lines = match state {
        TuiState::ShowingAlert { title, message } => vec![
            Line::from(Span::styled(title.as_str(), ERROR_STYLE)),
            Line::from(message.as_str()),
        ],
        TuiState::EnteringWord => vec![Line::from(Span::styled(message, MESSAGE_STYLE))],
    };
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str, score: usize) {
    let paragraph = Paragraph::new(format!("Score: {score}  |  {status}"))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
    let text = match state {
        TuiState::EnteringWord => "Type a word | ENTER: Submit | CTRL-N: New root word | ESC: Quit",
        TuiState::ShowingAlert { .. } => "Press any key to continue | ESC: Quit",
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

impl GameInterface for TuiInterface {
    fn display_new_round(&mut self, round: &RoundView) {
        self.round.update(round);
        self.current_input.clear();
        self.state = TuiState::EnteringWord;
        self.message = format!("New root word: {}", round.root_word);
        self.status = "New round".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Terminal input error: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, word: &str, score_delta: usize, round: &RoundView) {
        self.round.update(round);
        self.message = format!("✓ {word} (+{score_delta})");
        self.status = format!("Accepted: {word}");
        self.draw_or_log();
    }

    fn display_rejection(&mut self, title: &str, message: &str, round: &RoundView) {
        self.round.update(round);
        self.message.clear();
        self.state = TuiState::ShowingAlert {
            title: title.to_string(),
            message: message.to_string(),
        };
        self.status = format!("Rejected: {title}");
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, round: &RoundView) {
        self.round.update(round);
        self.message = "Exiting...".to_string();
        self.status = format!("Final score {}", round.score);
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render_to_string(draw: impl FnOnce(&mut Frame)) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_round_display_update() {
        let words = vec!["worm".to_string(), "silk".to_string()];
        let round = RoundView {
            root_word: "silkworm",
            accepted_words: &words,
            score: 8,
        };
        let mut display = RoundDisplay::default();
        display.update(&round);
        assert_eq!(display.root_word, "silkworm");
        assert_eq!(display.words, words);
        assert_eq!(display.score, 8);
    }

    #[test]
    fn test_render_title_shows_root_word() {
        let screen = render_to_string(|f| {
            let area = f.area();
            render_title(f, area, "silkworm");
        });
        assert!(screen.contains("SILKWORM"));
    }

    #[test]
    fn test_render_words_shows_lengths() {
        let words = vec!["worm".to_string(), "owl".to_string()];
        let screen = render_to_string(|f| {
            let area = f.area();
            render_words(f, area, &words);
        });
        assert!(screen.contains("worm"));
        assert!(screen.contains("owl"));
        assert!(screen.contains("Your words (2)"));
    }

    #[test]
    fn test_render_words_truncates() {
        let words: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
        let screen = render_to_string(|f| {
            let area = f.area();
            render_words(f, area, &words);
        });
        assert!(screen.contains("more"));
    }

    #[test]
    fn test_render_alert() {
        let state = TuiState::ShowingAlert {
            title: "Word not possible".to_string(),
            message: "Try again".to_string(),
        };
        let screen = render_to_string(|f| {
            let area = f.area();
            render_message(f, area, &state, "");
        });
        assert!(screen.contains("Word not possible"));
        assert!(screen.contains("Try again"));
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;
        let result: io::Result<()> = restore_on_error(Err(io::Error::other("no tty")), || {
            restored = true
        });
        assert!(result.is_err());
        assert!(restored);
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let mut restored = false;
        let result = restore_on_error(Ok(7), || restored = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!restored);
    }
}
