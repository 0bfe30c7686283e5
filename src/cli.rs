use crate::debug_log;
use crate::error::RejectionReason;
use crate::game_loop::{GameInterface, SessionSummary};
use crate::game_state::{GameState, GameStatus, GuessOutcome};
use crate::render::{
    LOSE_BANNER, MISS_MARKER, TITLE_BANNER, WIN_BANNER, gallows_art, guess_history, guessed_trail,
    letter_board, summary_line, tries_line,
};
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Stylize},
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Console hangman
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// No colors or screen clearing in console mode
    #[arg(long)]
    pub plain: bool,

    /// Write logs to this file instead of the cache directory
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const BOX_WIDTH: usize = 53;

/// Line-oriented console implementation of the `GameInterface` trait.
///
/// Prompts and screens go to `writer`, answers come from `reader`. With styling
/// on, the screen is cleared between turns and text is colored.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    styled: bool,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }

    #[must_use]
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.styled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            debug_log!("Console write failed: {}", e);
        }
    }

    fn clear_screen(&mut self) {
        if !self.styled {
            return;
        }
        if let Err(e) = queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0)) {
            debug_log!("Clear screen failed: {}", e);
        }
    }

    fn prompt(&mut self, question: &str) -> Option<String> {
        if let Err(e) = write!(self.writer, "{question}").and_then(|()| self.writer.flush()) {
            debug_log!("Prompt write failed: {}", e);
        }
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim_end_matches(['\n', '\r']).to_string()),
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                None
            }
        }
    }

    fn show_title(&mut self, max_tries: u8) {
        self.clear_screen();
        let title = self.paint(&format!("{TITLE_BANNER}\n{max_tries}"), Color::Green);
        self.emit(&title);
    }

    fn show_letter_box(&mut self, state: &GameState) {
        let mut letters = String::new();
        for (c, used) in letter_board(state.guessed()) {
            let cell = c.to_string();
            if used {
                letters.push_str(&self.paint(&cell, Color::DarkGrey));
            } else {
                letters.push_str(&cell);
            }
            letters.push(' ');
        }
        let border = "─".repeat(BOX_WIDTH);
        self.emit(&format!("┌{border}┐"));
        self.emit(&format!("│ {letters}│"));
        self.emit(&format!("└{border}┘"));
        if !state.guessed().is_empty() {
            self.emit(&format!("Guessed: {}", guess_history(state.guessed())));
        }
    }

    fn show_board(&mut self, state: &GameState) {
        let art = self.paint(
            gallows_art(state.wrong_guesses(), state.max_tries()),
            Color::Yellow,
        );
        self.emit(&format!("{art}\n"));
        self.emit(&state.masked_word());
        self.show_letter_box(state);
        self.emit(&tries_line(state.tries_remaining(), state.max_tries()));
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_word_list_path(&mut self) -> Option<String> {
        self.prompt("Enter file path: ")
    }

    fn read_index(&mut self) -> Option<String> {
        self.prompt("Enter index: ")
    }

    fn read_guess(&mut self) -> Option<String> {
        self.prompt("\nGuess a letter: ")
    }

    fn read_play_again(&mut self) -> Option<String> {
        self.prompt("Play again? y/n: ")
    }

    fn display_title(&mut self, max_tries: u8) {
        self.show_title(max_tries);
    }

    fn display_input_error(&mut self, message: &str) {
        self.emit(message);
    }

    fn display_start(&mut self, state: &GameState) {
        self.show_title(state.max_tries());
        self.emit("Let's start!");
        self.show_board(state);
    }

    fn display_rejection(&mut self, reason: RejectionReason, state: &GameState) {
        self.emit(&format!("X {reason}"));
        self.emit(&guessed_trail(state.guessed()));
        let retry = self.paint("Try again", Color::Red);
        self.emit(&retry);
    }

    fn display_turn(&mut self, state: &GameState, outcome: GuessOutcome) {
        self.show_title(state.max_tries());
        match outcome {
            GuessOutcome::Miss => {
                let marker = self.paint(MISS_MARKER, Color::Red);
                self.emit(&marker);
            }
            GuessOutcome::Hit => self.emit(""),
        }
        self.show_board(state);
    }

    fn display_outcome(&mut self, state: &GameState) {
        match state.status() {
            GameStatus::Won => {
                let banner = self.paint(WIN_BANNER, Color::Yellow);
                self.emit(&banner);
            }
            GameStatus::Lost => {
                let banner = self.paint(LOSE_BANNER, Color::Red);
                self.emit(&banner);
                self.emit(&format!("The word was: {}", state.secret()));
            }
            GameStatus::InProgress => {}
        }
    }

    fn display_summary(&mut self, summary: &SessionSummary) {
        self.emit(&summary_line(summary));
        self.emit("Goodbye!");
    }
}
