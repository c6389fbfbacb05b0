//! TUI (Terminal User Interface) module for Word Jumble
//!
//! Full-screen front-end built on Ratatui. `TuiInterface` implements
//! `GameInterface`, so the game loop drives it exactly like the line CLI.
//!
//! # Input
//! - Letters, digits and punctuation edit the guess, BACKSPACE deletes
//! - ENTER submits, TAB skips the word, ESC quits

use crate::game_state::{GameInterface, MAX_ATTEMPTS, POINTS_PER_CORRECT, RoundInfo, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_CHARS: usize = 40;
const MAX_HISTORY: usize = 6;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const PUZZLE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    /// Word over (solved or revealed); any key moves on.
    RoundOver,
    /// Session finished - message stored in interface.message
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HistoryEntry {
    Correct(String),
    Missed(String),
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    round: Option<&'a RoundInfo>,
    attempts_left: u32,
    score: u32,
    current_input: &'a str,
    state: TuiState,
    history: &'a [HistoryEntry],
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: Option<RoundInfo>,
    attempts_left: u32,
    score: u32,
    current_input: String,
    state: TuiState,
    history: Vec<HistoryEntry>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            round: None,
            attempts_left: MAX_ATTEMPTS,
            score: 0,
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            history: Vec::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
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
        let ctx = RenderContext {
            round: self.round.as_ref(),
            attempts_left: self.attempts_left,
            score: self.score,
            current_input: &self.current_input,
            state: self.state,
            history: &self.history,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Puzzle
                Constraint::Length(3), // Guess input
                Constraint::Min(6),    // Info panel
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_puzzle(f, chunks[1], ctx);
        Self::render_input(f, chunks[2], ctx.current_input, ctx.state);
        Self::render_info(f, chunks[3], ctx.history, ctx.message, ctx.error_message);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORD JUMBLE")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_puzzle(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let lines = match ctx.round {
            Some(round) => vec![
                Line::from(Span::styled(spaced_letters(&round.jumbled), PUZZLE_STYLE)),
                Line::from(""),
                Line::from(format!(
                    "Word {} of {}   Score: {}   Tries left: {}",
                    round.round, round.total, ctx.score, ctx.attempts_left
                )),
            ],
            None => vec![Line::from("Waiting for the first word...")],
        };

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Unscramble").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, state: TuiState) {
        let text = if state == TuiState::EnteringGuess {
            format!("> {current_input}_")
        } else {
            String::new()
        };
        let paragraph =
            Paragraph::new(text).block(Block::default().title("Guess").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(
        f: &mut Frame,
        area: Rect,
        history: &[HistoryEntry],
        message: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();

        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }

        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        if !history.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled("Previous words:", HEADER_STYLE)]));
            for entry in history.iter().rev().take(MAX_HISTORY) {
                let line = match entry {
                    HistoryEntry::Correct(word) => Line::from(vec![Span::styled(
                        format!("  ✓ {word} (+{POINTS_PER_CORRECT})"),
                        SUCCESS_STYLE,
                    )]),
                    HistoryEntry::Missed(word) => Line::from(format!("  ✗ {word}")),
                };
                lines.push(line);
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type your guess | ENTER: Submit | TAB: Skip word | ESC: Quit",
            TuiState::RoundOver => "Press any key for the next word | ESC: Quit",
            TuiState::GameOver => "Press any key to quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Blocks until a key press arrives.
    fn next_key() -> Result<KeyEvent, io::Error> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                other => {
                    debug_log!("next_key() - Ignoring event: {:?}", other);
                }
            }
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(UserAction::Exit);
            }
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if self.current_input.chars().count() < MAX_INPUT_CHARS {
                    self.current_input.push(c);
                } else {
                    self.error_message = "Guess is too long!".to_string();
                }
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.trim().is_empty() => {
                self.error_message = "Type a word first!".to_string();
            }
            KeyCode::Enter => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting guess '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Tab => {
                self.current_input.clear();
                return Some(UserAction::Skip);
            }
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    /// Holds the finished round on screen until the player presses a key.
    /// Returns false if the player asked to quit.
    fn wait_for_continue(&mut self) -> bool {
        self.draw_or_log();
        match Self::next_key() {
            Ok(key) => key.code != KeyCode::Esc,
            Err(e) => {
                debug_log!("wait_for_continue() - Input error: {}", e);
                false
            }
        }
    }

    fn finish_round(&mut self, entry: HistoryEntry, message: String) {
        self.history.push(entry);
        self.state = TuiState::RoundOver;
        self.message = message;
        self.status = format!("Score: {}", self.score);
    }
}

fn spaced_letters(word: &str) -> String {
    word.chars()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self, word_count: usize) {
        self.message = format!(
            "Loaded {word_count} words. {POINTS_PER_CORRECT} points per word, {MAX_ATTEMPTS} tries each."
        );
        self.draw_or_log();
    }

    fn display_round(&mut self, info: &RoundInfo) {
        if self.state == TuiState::RoundOver && !self.wait_for_continue() {
            // Leave the RoundOver state so the next read_guess sees the quit request.
            self.state = TuiState::GameOver;
        } else {
            self.state = TuiState::EnteringGuess;
            self.message.clear();
        }
        self.round = Some(info.clone());
        self.attempts_left = info.attempts_left;
        self.score = info.score;
        self.current_input.clear();
        self.error_message.clear();
        self.status = "Waiting for guess...".to_string();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        if self.state == TuiState::GameOver {
            return Some(UserAction::Exit);
        }

        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match Self::next_key() {
                Ok(key) => {
                    if let Some(action) = self.handle_guess_input(key) {
                        return Some(action);
                    }
                }
                Err(e) => {
                    info_log!("read_guess() - Error handling input: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_correct(&mut self, word: &str, score: u32) {
        self.score = score;
        self.finish_round(
            HistoryEntry::Correct(word.to_string()),
            format!("✓ Correct! The word was '{word}'."),
        );
    }

    fn display_incorrect(&mut self, attempts_left: u32) {
        self.attempts_left = attempts_left;
        self.error_message = format!("Not quite. Tries left: {attempts_left}");
        self.draw_or_log();
    }

    fn display_reveal(&mut self, word: &str) {
        self.attempts_left = 0;
        self.finish_round(
            HistoryEntry::Missed(word.to_string()),
            format!("The word was '{word}'."),
        );
    }

    fn display_exhausted(&mut self, score: u32) {
        self.score = score;
        self.state = TuiState::GameOver;
        self.message = format!("No words left! Final score: {score}");
        self.status = "Game Over".to_string();
        // Keep the final screen up until the player acknowledges it.
        self.wait_for_continue();
    }

    fn display_exit_message(&mut self, score: u32) {
        self.message = format!("Exiting. Final score: {score}");
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
