use crate::error::GameError;
use std::fs;
use std::path::{Path, PathBuf};

/// Split a word list on any whitespace. Words keep their original case.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.split_whitespace().map(str::to_string).collect()
}

/// Read a word list file.
///
/// A missing path is reported as [`GameError::ResourceNotFound`] so the caller
/// can ask for another one. An empty file is not an error here; it surfaces
/// when a word is resolved from it.
pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(GameError::ResourceNotFound(path.to_path_buf()));
    }
    let data = fs::read_to_string(path).map_err(|source| GameError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_wordbank_from_str(&data))
}

/// Pick the word at a 1-based `index`, wrapping around past the end of the list.
///
/// `index` 0 wraps backwards onto the last word.
pub fn resolve_word(words: &[String], index: usize) -> Result<&str, GameError> {
    if words.is_empty() {
        return Err(GameError::EmptyWordList);
    }
    let len = words.len();
    let position = (index % len + len - 1) % len;
    Ok(&words[position])
}

/// A positive 1-based index of any size, kept as its decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordIndex(String);

impl WordIndex {
    /// `None` unless `digits` is all ASCII digits with at least one non-zero.
    #[must_use]
    pub fn from_digits(digits: &str) -> Option<Self> {
        let valid = !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit())
            && digits.chars().any(|c| c != '0');
        valid.then(|| Self(digits.trim_start_matches('0').to_string()))
    }

    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The index modulo `len`, a position [`resolve_word`] maps to the same word.
    #[must_use]
    pub fn reduce(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let len = len as u128;
        let rest = self
            .0
            .bytes()
            .fold(0u128, |acc, b| (acc * 10 + u128::from(b - b'0')) % len);
        // rest < len, which came from a usize
        rest as usize
    }
}

/// Pick the word for an index of any size.
pub fn resolve_word_at<'a>(words: &'a [String], index: &WordIndex) -> Result<&'a str, GameError> {
    resolve_word(words, index.reduce(words.len()))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(input: &str) -> PathBuf {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(input),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(input),
    }
}
