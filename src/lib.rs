// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_loop;
pub mod game_state;
pub mod logging;
pub mod render;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{GameError, RejectionReason};
pub use game_loop::{GameInterface, SessionSummary, game_loop, play_round};
pub use game_state::{GameState, GameStatus, GuessOutcome, GuessedLetters, Letter, MAX_TRIES};
pub use validator::validate_guess;
pub use wordbank::{
    WordIndex, load_wordbank_from_file, load_wordbank_from_str, resolve_word, resolve_word_at,
};
