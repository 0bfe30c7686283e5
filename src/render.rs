//! Plain-text pieces of the game screen.
//!
//! Everything here is a pure function of game data. Front ends decide how to
//! color and place the text.

use crate::game_loop::SessionSummary;
use crate::game_state::{ALPHABET, GuessedLetters, Letter};

pub const TITLE_BANNER: &str = r"
   | |  | |
   | |__| | __ _ _ __   __ _ _ __ ___   __ _ _ __
   |  __  |/ _` | '_ \ / _` | '_ ` _ \ / _` | '_ \
   | |  | | (_| | | | | (_| | | | | | | (_| | | | |
   |_|  |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                        __/ |
                       |___/";

pub const WIN_BANNER: &str = r"
███████████████████████
█▄─█▀▀▀█─▄█▄─▄█▄─▀█▄─▄█
██─█─█─█─███─███─█▄▀─██
▀▀▄▄▄▀▄▄▄▀▀▄▄▄▀▄▄▄▀▀▄▄▀";

pub const LOSE_BANNER: &str = r"
████████████████████████
█▄─▄███─▄▄─█─▄▄▄▄█▄─▄▄─█
██─██▀█─██─█▄▄▄▄─██─▄█▀█
▀▄▄▄▄▄▀▄▄▄▄▀▄▄▄▄▄▀▄▄▄▄▄▀";

pub const MISS_MARKER: &str = ":(";

const GALLOWS: [&str; 7] = [
    "x-------x\n\n\n\n\n",
    "x-------x\n|\n|\n|\n|\n|",
    "x-------x\n|       |\n|       0\n|\n|\n|",
    "x-------x\n|       |\n|       0\n|       |\n|\n|",
    "x-------x\n|       |\n|       0\n|      /|\\\n|\n|",
    "x-------x\n|       |\n|       0\n|      /|\\\n|      /\n|",
    "x-------x\n|       |\n|       0\n|      /|\\\n|      / \\\n|",
];

/// Number of drawable gallows stages, including the empty one.
pub const GALLOWS_STAGES: usize = GALLOWS.len();

/// Map wrong guesses onto a gallows stage. Any number of tries is spread over
/// the seven stages; the last stage always means no tries left.
#[must_use]
pub fn gallows_stage(wrong: u8, max_tries: u8) -> usize {
    let last = GALLOWS_STAGES - 1;
    if max_tries == 0 || wrong >= max_tries {
        return last;
    }
    let (wrong, max) = (usize::from(wrong), usize::from(max_tries));
    (wrong * last).div_ceil(max)
}

#[must_use]
pub fn gallows_art(wrong: u8, max_tries: u8) -> &'static str {
    GALLOWS[gallows_stage(wrong, max_tries)]
}

/// Every letter a-z with whether it has been played.
#[must_use]
pub fn letter_board(guessed: &GuessedLetters) -> Vec<(char, bool)> {
    ALPHABET
        .map(|c| {
            let used = Letter::new(c).is_some_and(|letter| guessed.contains(letter));
            (c, used)
        })
        .collect()
}

/// Played letters in alphabetical order, `a -> c -> t`.
#[must_use]
pub fn guessed_trail(guessed: &GuessedLetters) -> String {
    let letters: Vec<String> = guessed.sorted().iter().map(Letter::to_string).collect();
    letters.join(" -> ")
}

/// Played letters in the order they were guessed, `t a c`.
#[must_use]
pub fn guess_history(guessed: &GuessedLetters) -> String {
    let letters: Vec<String> = guessed.iter().map(|letter| letter.to_string()).collect();
    letters.join(" ")
}

#[must_use]
pub fn summary_line(summary: &SessionSummary) -> String {
    format!(
        "Games played: {} | Won: {} | Lost: {}",
        summary.games_played, summary.games_won, summary.games_lost
    )
}

#[must_use]
pub fn tries_line(tries_remaining: u8, max_tries: u8) -> String {
    format!("Tries left: {tries_remaining}/{max_tries}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(letters: &str) -> GuessedLetters {
        letters.chars().filter_map(Letter::new).collect()
    }

    #[test]
    fn test_gallows_stage_default_tries() {
        for wrong in 0..=6 {
            assert_eq!(gallows_stage(wrong, 6), usize::from(wrong));
        }
    }

    #[test]
    fn test_gallows_stage_scales_to_other_maximums() {
        assert_eq!(gallows_stage(0, 1), 0);
        assert_eq!(gallows_stage(1, 1), 6);
        assert_eq!(gallows_stage(1, 3), 2);
        assert_eq!(gallows_stage(1, 12), 1);
        assert_eq!(gallows_stage(11, 12), 6);
        assert_eq!(gallows_stage(0, 0), 6);
    }

    #[test]
    fn test_gallows_art_full_figure_at_end() {
        assert!(gallows_art(6, 6).contains("/ \\"));
        assert!(!gallows_art(0, 6).contains('0'));
    }

    #[test]
    fn test_letter_board_marks_used_letters() {
        let board = letter_board(&guessed("ca"));
        assert_eq!(board.len(), 26);
        assert_eq!(board[0], ('a', true));
        assert_eq!(board[1], ('b', false));
        assert_eq!(board[2], ('c', true));
        assert_eq!(board[25], ('z', false));
    }

    #[test]
    fn test_guessed_trail_sorted() {
        assert_eq!(guessed_trail(&guessed("tca")), "a -> c -> t");
        assert_eq!(guessed_trail(&GuessedLetters::new()), "");
    }

    #[test]
    fn test_guess_history_keeps_play_order() {
        assert_eq!(guess_history(&guessed("tca")), "t c a");
        assert_eq!(guess_history(&GuessedLetters::new()), "");
    }

    #[test]
    fn test_summary_line() {
        let summary = SessionSummary {
            games_played: 3,
            games_won: 2,
            games_lost: 1,
        };
        assert_eq!(summary_line(&summary), "Games played: 3 | Won: 2 | Lost: 1");
    }

    #[test]
    fn test_tries_line() {
        assert_eq!(tries_line(4, 6), "Tries left: 4/6");
    }
}
