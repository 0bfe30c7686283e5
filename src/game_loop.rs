use crate::error::{GameError, RejectionReason};
use crate::game_state::{GameState, GameStatus, GuessOutcome, MAX_TRIES};
use crate::validator::validate_guess;
use crate::wordbank::{WordIndex, expand_home, load_wordbank_from_file, resolve_word_at};
use crate::{debug_log, info_log};

/// Input and output collaborator for a hangman session.
///
/// `read_*` methods return the player's raw answer, or `None` once input has
/// ended or the player asked to quit. Validation happens in the game loop.
pub trait GameInterface {
    fn read_word_list_path(&mut self) -> Option<String>;
    fn read_index(&mut self) -> Option<String>;
    fn read_guess(&mut self) -> Option<String>;
    fn read_play_again(&mut self) -> Option<String>;

    fn display_title(&mut self, max_tries: u8);
    /// A setup answer was not usable and will be asked for again.
    fn display_input_error(&mut self, message: &str);
    fn display_start(&mut self, state: &GameState);
    fn display_rejection(&mut self, reason: RejectionReason, state: &GameState);
    fn display_turn(&mut self, state: &GameState, outcome: GuessOutcome);
    fn display_outcome(&mut self, state: &GameState);
    fn display_summary(&mut self, summary: &SessionSummary);
}

/// Results of every finished game in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
}

impl SessionSummary {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won => self.games_won += 1,
            GameStatus::Lost => self.games_lost += 1,
            GameStatus::InProgress => return,
        }
        self.games_played += 1;
    }
}

/// Positive decimal index of any length; signs, spaces inside, and zero are refused.
#[must_use]
pub fn parse_index(input: &str) -> Option<WordIndex> {
    WordIndex::from_digits(input.trim())
}

#[must_use]
pub fn parse_play_again(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

/// Ask for word list files until one can be read.
pub fn prompt_word_list<I: GameInterface + ?Sized>(interface: &mut I) -> Option<Vec<String>> {
    loop {
        let raw = interface.read_word_list_path()?;
        let path = expand_home(raw.trim());
        match load_wordbank_from_file(&path) {
            Ok(words) => {
                log::info!("Loaded {} words from {}", words.len(), path.display());
                return Some(words);
            }
            Err(e) => {
                log::warn!("Word list rejected: {e}");
                let message = match e {
                    GameError::ResourceNotFound(_) => {
                        "File not found. Please try again.".to_string()
                    }
                    other => format!("{other}. Please try again."),
                };
                interface.display_input_error(&message);
            }
        }
    }
}

pub fn prompt_index<I: GameInterface + ?Sized>(interface: &mut I) -> Option<WordIndex> {
    loop {
        let raw = interface.read_index()?;
        if let Some(index) = parse_index(&raw) {
            return Some(index);
        }
        debug_log!("Invalid index input: {:?}", raw);
        interface.display_input_error("Input is not valid.");
    }
}

pub fn prompt_play_again<I: GameInterface + ?Sized>(interface: &mut I) -> Option<bool> {
    loop {
        let raw = interface.read_play_again()?;
        if let Some(answer) = parse_play_again(&raw) {
            return Some(answer);
        }
        debug_log!("Invalid play-again input: {:?}", raw);
        interface.display_input_error("Please answer y or n.");
    }
}

/// Ask for a word list and an index and build a fresh game from them.
///
/// `Ok(None)` means the player left during setup.
///
/// # Errors
///
/// [`GameError::EmptyWordList`] if the chosen file holds no words.
pub fn setup_game<I: GameInterface + ?Sized>(
    interface: &mut I,
) -> Result<Option<GameState>, GameError> {
    let Some(words) = prompt_word_list(interface) else {
        return Ok(None);
    };
    if words.is_empty() {
        return Err(GameError::EmptyWordList);
    }
    let Some(index) = prompt_index(interface) else {
        return Ok(None);
    };
    let secret = resolve_word_at(&words, &index)?;
    info_log!(
        "Secret word chosen at index {} of {}",
        index.digits(),
        words.len()
    );
    Ok(Some(GameState::new(secret)))
}

/// Play turns until the game is won or lost.
///
/// Returns the final status, or `None` if input ended mid-game.
pub fn play_round<I: GameInterface + ?Sized>(
    state: &mut GameState,
    interface: &mut I,
) -> Option<GameStatus> {
    interface.display_start(state);
    while !state.status().is_terminal() {
        let raw = interface.read_guess()?;
        let letter = match validate_guess(&raw, state.guessed()) {
            Ok(letter) => letter,
            Err(reason) => {
                debug_log!("Guess {:?} rejected: {:?}", raw, reason);
                interface.display_rejection(reason, state);
                continue;
            }
        };
        match state.apply_guess(letter) {
            Ok(outcome) => {
                debug_log!(
                    "Guess '{}' was a {:?}, {} tries left",
                    letter,
                    outcome,
                    state.tries_remaining()
                );
                interface.display_turn(state, outcome);
            }
            Err(GameError::Rejected(reason)) => interface.display_rejection(reason, state),
            Err(e) => {
                log::warn!("Guess not applied: {e}");
                break;
            }
        }
    }
    let status = state.status();
    log::info!(
        "Game over: {:?} with {} wrong guesses",
        status,
        state.wrong_guesses()
    );
    interface.display_outcome(state);
    Some(status)
}

/// Run games back to back until the player declines another one or input ends.
///
/// # Errors
///
/// Stops with [`GameError::EmptyWordList`] when a game cannot be set up.
pub fn game_loop<I: GameInterface + ?Sized>(
    interface: &mut I,
) -> Result<SessionSummary, GameError> {
    let mut summary = SessionSummary::default();
    loop {
        interface.display_title(MAX_TRIES);
        let Some(mut state) = setup_game(interface)? else {
            break;
        };
        let Some(status) = play_round(&mut state, interface) else {
            break;
        };
        summary.record(status);
        if prompt_play_again(interface) != Some(true) {
            break;
        }
    }
    log::info!(
        "Session finished: {} played, {} won, {} lost",
        summary.games_played,
        summary.games_won,
        summary.games_lost
    );
    interface.display_summary(&summary);
    Ok(summary)
}
