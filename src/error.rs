use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a proposed guess was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("Please enter exactly one letter.")]
    WrongLength,
    #[error("Only letters a-z are allowed.")]
    NotAlphabetic,
    #[error("You already guessed that letter.")]
    AlreadyGuessed,
}

#[derive(Debug, Error)]
pub enum GameError {
    /// Fatal: there is nothing to pick a secret word from.
    #[error("the word list is empty")]
    EmptyWordList,
    #[error("file not found: {}", .0.display())]
    ResourceNotFound(PathBuf),
    #[error("could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Rejected(#[from] RejectionReason),
    #[error("the game is already over")]
    GameOver,
}
