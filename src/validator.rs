use crate::error::RejectionReason;
use crate::game_state::{GuessedLetters, Letter};

/// Check a raw guess against the letters already played.
///
/// Surrounding whitespace is ignored. The accepted letter comes back lowercased.
pub fn validate_guess(candidate: &str, guessed: &GuessedLetters) -> Result<Letter, RejectionReason> {
    let mut chars = candidate.trim().chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(RejectionReason::WrongLength);
    };
    let letter = Letter::new(c).ok_or(RejectionReason::NotAlphabetic)?;
    if guessed.contains(letter) {
        return Err(RejectionReason::AlreadyGuessed);
    }
    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(letters: &str) -> GuessedLetters {
        letters.chars().filter_map(Letter::new).collect()
    }

    #[test]
    fn test_accepts_single_letter_lowercased() {
        let none = GuessedLetters::new();
        assert_eq!(validate_guess("a", &none).unwrap().as_char(), 'a');
        assert_eq!(validate_guess("Q", &none).unwrap().as_char(), 'q');
        assert_eq!(validate_guess("  z\n", &none).unwrap().as_char(), 'z');
    }

    #[test]
    fn test_rejects_wrong_length() {
        let none = GuessedLetters::new();
        assert_eq!(validate_guess("ab", &none), Err(RejectionReason::WrongLength));
        assert_eq!(validate_guess("", &none), Err(RejectionReason::WrongLength));
        assert_eq!(validate_guess("   ", &none), Err(RejectionReason::WrongLength));
        assert_eq!(validate_guess("a b", &none), Err(RejectionReason::WrongLength));
    }

    #[test]
    fn test_rejects_non_alphabetic() {
        let none = GuessedLetters::new();
        for candidate in ["3", "!", "_", "é", "ß", "Ω"] {
            assert_eq!(
                validate_guess(candidate, &none),
                Err(RejectionReason::NotAlphabetic),
                "candidate {candidate:?}"
            );
        }
    }

    #[test]
    fn test_rejects_already_guessed_any_case() {
        let played = guessed("a");
        assert_eq!(validate_guess("A", &played), Err(RejectionReason::AlreadyGuessed));
        assert_eq!(validate_guess("a", &played), Err(RejectionReason::AlreadyGuessed));
        for c in 'a'..='z' {
            let played = guessed(&c.to_string());
            let upper = c.to_ascii_uppercase().to_string();
            assert_eq!(validate_guess(&upper, &played), Err(RejectionReason::AlreadyGuessed));
            assert_eq!(validate_guess(&c.to_string(), &played), Err(RejectionReason::AlreadyGuessed));
        }
    }

    #[test]
    fn test_length_is_checked_before_alphabet() {
        let played = guessed("a");
        assert_eq!(validate_guess("a3", &played), Err(RejectionReason::WrongLength));
        assert_eq!(validate_guess("aa", &played), Err(RejectionReason::WrongLength));
    }

    #[test]
    fn test_same_input_same_result() {
        let played = guessed("xyz");
        for candidate in ["x", "b", "bb", "7"] {
            assert_eq!(validate_guess(candidate, &played), validate_guess(candidate, &played));
        }
    }
}
