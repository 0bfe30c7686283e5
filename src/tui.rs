//! TUI (Terminal User Interface) module for hangman
//!
//! Full-screen front end built on Ratatui. It implements the same
//! `GameInterface` as the console, so the game loop drives both identically.
//!
//! Every prompt is a single line edited in place: ENTER submits it, ESC quits
//! the session.

use crate::error::RejectionReason;
use crate::game_loop::{GameInterface, SessionSummary};
use crate::game_state::{GameState, GameStatus, GuessOutcome};
use crate::render::{
    LOSE_BANNER, MISS_MARKER, TITLE_BANNER, WIN_BANNER, gallows_art, guess_history, guessed_trail,
    letter_board, summary_line, tries_line,
};
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
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LEN: usize = 256;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const WIN_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const GALLOWS_STYLE: Style = Style::new().fg(Color::Yellow);
const USED_LETTER_STYLE: Style = Style::new().fg(Color::DarkGray);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// What the screen shows; borrowed from the interface for one frame.
struct RenderContext<'a> {
    max_tries: u8,
    game: Option<&'a GameState>,
    prompt: &'a str,
    input: &'a str,
    message: &'a str,
    error_message: &'a str,
}

/// Main TUI interface component.
///
/// Owns the terminal for its whole lifetime and restores it on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    max_tries: u8,
    game: Option<GameState>,
    prompt: &'static str,
    input: String,
    message: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            max_tries: 0,
            game: None,
            prompt: "",
            input: String::new(),
            message: String::new(),
            error_message: String::new(),
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
            max_tries: self.max_tries,
            game: self.game.as_ref(),
            prompt: self.prompt,
            input: &self.input,
            message: &self.message,
            error_message: &self.error_message,
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
                Constraint::Length(10), // Title
                Constraint::Length(10), // Gallows and word
                Constraint::Length(3),  // Letter board
                Constraint::Min(6),     // Messages and banners
                Constraint::Length(3),  // Input line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.max_tries);
        Self::render_gallows(f, chunks[1], ctx.game);
        Self::render_letter_board(f, chunks[2], ctx.game);
        Self::render_info(f, chunks[3], ctx);
        Self::render_input(f, chunks[4], ctx.prompt, ctx.input);
        Self::render_instructions(f, chunks[5]);
    }

    fn render_title(f: &mut Frame, area: Rect, max_tries: u8) {
        let mut lines: Vec<Line> = TITLE_BANNER
            .lines()
            .skip_while(|l| l.is_empty())
            .map(Line::from)
            .collect();
        lines.push(Line::from(format!("Max tries: {max_tries}")));
        let title = Paragraph::new(lines)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, game: Option<&GameState>) {
        let block = Block::default().title("Gallows").borders(Borders::ALL);
        let Some(game) = game else {
            f.render_widget(block, area);
            return;
        };

        let mut lines: Vec<Line> = gallows_art(game.wrong_guesses(), game.max_tries())
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), GALLOWS_STYLE)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(game.masked_word(), HEADER_STYLE),
            Span::raw("    "),
            Span::raw(tries_line(game.tries_remaining(), game.max_tries())),
        ]));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_letter_board(f: &mut Frame, area: Rect, game: Option<&GameState>) {
        let mut spans = vec![Span::raw(" ")];
        let mut title = "Letters".to_string();
        if let Some(game) = game {
            if !game.guessed().is_empty() {
                title = format!("Letters (played: {})", guess_history(game.guessed()));
            }
            for (c, used) in letter_board(game.guessed()) {
                let style = if used {
                    USED_LETTER_STYLE
                } else {
                    Style::default()
                };
                spans.push(Span::styled(c.to_string(), style));
                spans.push(Span::raw(" "));
            }
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(game) = ctx.game {
            match game.status() {
                GameStatus::Won => {
                    lines.extend(WIN_BANNER.lines().map(|l| Line::styled(l.to_string(), WIN_STYLE)));
                }
                GameStatus::Lost => {
                    lines.extend(
                        LOSE_BANNER
                            .lines()
                            .map(|l| Line::styled(l.to_string(), ERROR_STYLE)),
                    );
                    lines.push(Line::from(format!("The word was: {}", game.secret())));
                }
                GameStatus::InProgress => {}
            }
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, prompt: &str, input: &str) {
        let line = Line::from(vec![
            Span::styled(prompt, MESSAGE_STYLE),
            Span::raw(input),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]);
        let paragraph =
            Paragraph::new(line).block(Block::default().title("Input").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new("Type your answer | ENTER: Submit | ESC: Quit")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Edit one line of input. `None` when the player quits or the terminal fails.
    fn read_line(&mut self, prompt: &'static str) -> Option<String> {
        self.prompt = prompt;
        self.input.clear();
        loop {
            if let Err(e) = self.draw() {
                log::warn!("Draw failed while reading input: {e}");
                return None;
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    log::warn!("Failed to read terminal event: {e}");
                    return None;
                }
            };
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
            {
                match self.handle_key(key) {
                    KeyResult::Submit => {
                        self.error_message.clear();
                        return Some(std::mem::take(&mut self.input));
                    }
                    KeyResult::Quit => {
                        info_log!("read_line() - Player quit");
                        return None;
                    }
                    KeyResult::Continue => {}
                }
            }
        }
    }

    /// Block until a key is pressed so the last frame stays readable.
    fn wait_for_key(&mut self) {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Failed to read terminal event: {e}");
                    return;
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        debug_log!("handle_key() - code={:?}, modifiers={:?}", key.code, key.modifiers);
        match key.code {
            KeyCode::Esc => KeyResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyResult::Quit,
            KeyCode::Enter => KeyResult::Submit,
            KeyCode::Backspace => {
                self.input.pop();
                KeyResult::Continue
            }
            KeyCode::Char(c)
                if !c.is_control()
                    && !key.modifiers.contains(KeyModifiers::ALT)
                    && !key.modifiers.contains(KeyModifiers::CONTROL)
                    && self.input.chars().count() < MAX_INPUT_LEN =>
            {
                self.input.push(c);
                KeyResult::Continue
            }
            _ => KeyResult::Continue,
        }
    }
}

enum KeyResult {
    Continue,
    Submit,
    Quit,
}

impl GameInterface for TuiInterface {
    fn read_word_list_path(&mut self) -> Option<String> {
        self.read_line("Enter file path: ")
    }

    fn read_index(&mut self) -> Option<String> {
        self.read_line("Enter index: ")
    }

    fn read_guess(&mut self) -> Option<String> {
        self.read_line("Guess a letter: ")
    }

    fn read_play_again(&mut self) -> Option<String> {
        self.read_line("Play again? y/n: ")
    }

    fn display_title(&mut self, max_tries: u8) {
        self.max_tries = max_tries;
        self.game = None;
        self.message.clear();
        self.error_message.clear();
        self.draw_or_log();
    }

    fn display_input_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.draw_or_log();
    }

    fn display_start(&mut self, state: &GameState) {
        self.game = Some(state.clone());
        self.message = "Let's start!".to_string();
        self.draw_or_log();
    }

    fn display_rejection(&mut self, reason: RejectionReason, state: &GameState) {
        self.message = format!("Guessed: {}", guessed_trail(state.guessed()));
        self.error_message = format!("{reason} Try again");
        self.draw_or_log();
    }

    fn display_turn(&mut self, state: &GameState, outcome: GuessOutcome) {
        self.game = Some(state.clone());
        self.message = match outcome {
            GuessOutcome::Hit => String::new(),
            GuessOutcome::Miss => MISS_MARKER.to_string(),
        };
        self.error_message.clear();
        self.draw_or_log();
    }

    fn display_outcome(&mut self, state: &GameState) {
        self.game = Some(state.clone());
        self.message.clear();
        self.draw_or_log();
    }

    fn display_summary(&mut self, summary: &SessionSummary) {
        info_log!("TuiInterface::display_summary() - {:?}", summary);
        self.message = summary_line(summary);
        self.error_message.clear();
        self.prompt = "Press any key to exit";
        self.input.clear();
        self.draw_or_log();
        self.wait_for_key();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
