use crate::error::{GameError, RejectionReason};
use std::fmt;

pub const MAX_TRIES: u8 = 6;
pub const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// A single lowercase Latin letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Normalizes to lowercase; `None` for anything outside a-z.
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| Self(c.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letters guessed so far, in the order they were guessed. Never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<Letter>,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Returns `false` if the letter was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }

    #[must_use]
    pub fn sorted(&self) -> Vec<Letter> {
        let mut letters = self.letters.clone();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromIterator<Letter> for GuessedLetters {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut guessed = Self::new();
        for letter in iter {
            guessed.insert(letter);
        }
        guessed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

/// One round of hangman.
///
/// Status is never stored; it is derived from the secret word, the guessed
/// letters and the remaining tries every time it is asked for.
#[derive(Debug, Clone)]
pub struct GameState {
    secret: String,
    guessed: GuessedLetters,
    tries_remaining: u8,
    max_tries: u8,
}

impl GameState {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self::with_max_tries(secret, MAX_TRIES)
    }

    /// The secret is lowercased here. Characters outside a-z are shown as-is
    /// and never need guessing.
    #[must_use]
    pub fn with_max_tries(secret: &str, max_tries: u8) -> Self {
        Self {
            secret: secret.to_lowercase(),
            guessed: GuessedLetters::new(),
            tries_remaining: max_tries,
            max_tries,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[must_use]
    pub fn tries_remaining(&self) -> u8 {
        self.tries_remaining
    }

    #[must_use]
    pub fn max_tries(&self) -> u8 {
        self.max_tries
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u8 {
        self.max_tries - self.tries_remaining
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.secret.contains(letter.as_char())
    }

    fn is_hidden(&self, c: char) -> bool {
        Letter::new(c).is_some_and(|letter| !self.guessed.contains(letter))
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        !self.secret.chars().any(|c| self.is_hidden(c))
    }

    /// Win is checked before tries run out: a correct final guess never costs a try.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_revealed() {
            GameStatus::Won
        } else if self.tries_remaining == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Revealed letters in word order separated by spaces, `_` for the rest.
    #[must_use]
    pub fn masked_word(&self) -> String {
        let cells: Vec<String> = self
            .secret
            .chars()
            .map(|c| {
                let shown = if self.is_hidden(c) { '_' } else { c };
                shown.to_string()
            })
            .collect();
        cells.join(" ")
    }

    /// Record an accepted letter.
    ///
    /// The letter is added to the guessed set whether or not it is in the word;
    /// a miss costs one try.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game is won or lost, and
    /// [`RejectionReason::AlreadyGuessed`] for a repeat. Neither changes state.
    pub fn apply_guess(&mut self, letter: Letter) -> Result<GuessOutcome, GameError> {
        if self.status().is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.guessed.insert(letter) {
            return Err(RejectionReason::AlreadyGuessed.into());
        }
        if self.contains(letter) {
            Ok(GuessOutcome::Hit)
        } else {
            self.tries_remaining -= 1;
            Ok(GuessOutcome::Miss)
        }
    }
}
