// Integration tests for the hangman application
// These tests drive whole sessions through the console interface

use hangman::cli::CliInterface;
use hangman::*;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

fn write_word_list(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run_session(input: &str) -> (Result<SessionSummary, GameError>, String) {
    let mut interface = CliInterface::new(Cursor::new(input.to_string()), Vec::new());
    let result = game_loop(&mut interface);
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (result, output)
}

#[test]
fn test_end_to_end_win() {
    let path = write_word_list("hangman_it_win.txt", "dog cat\nbird");
    let input = format!("{}\n2\nc\na\nt\nn\n", path.display());

    let (result, output) = run_session(&input);

    let summary = result.unwrap();
    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.games_won, 1);
    assert!(output.contains("Let's start!"));
    assert!(output.contains("c a t"));
    assert!(output.contains("Tries left: 6/6"));
    assert!(!output.contains(":("));
    assert!(output.contains("Games played: 1 | Won: 1 | Lost: 0"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_end_to_end_loss_reveals_word() {
    let path = write_word_list("hangman_it_loss.txt", "cat");
    let input = format!("{}\n1\nx\ny\nz\nq\nw\ne\nn\n", path.display());

    let (result, output) = run_session(&input);

    let summary = result.unwrap();
    assert_eq!(summary.games_lost, 1);
    assert!(output.contains("Tries left: 0/6"));
    assert!(output.contains("The word was: cat"));
    assert_eq!(output.matches(":(").count(), 6);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_bad_setup_inputs_are_asked_again() {
    let path = write_word_list("hangman_it_setup.txt", "ox");
    let input = format!(
        "/no/such/hangman/words.txt\n{}\n-1\nfirst\n0\n1\no\nx\nn\n",
        path.display()
    );

    let (result, output) = run_session(&input);

    assert_eq!(result.unwrap().games_won, 1);
    assert_eq!(output.matches("File not found. Please try again.").count(), 1);
    assert_eq!(output.matches("Input is not valid.").count(), 3);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_index_wraps_around_word_list() {
    let path = write_word_list("hangman_it_wrap.txt", "ox cat");
    // Index 3 wraps onto "ox".
    let input = format!("{}\n3\no\nx\nn\n", path.display());

    let (result, output) = run_session(&input);

    assert_eq!(result.unwrap().games_won, 1);
    assert!(output.contains("o x"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_index_larger_than_any_integer_wraps() {
    let path = write_word_list("hangman_it_huge_index.txt", "ox cat");
    // 10^23 + 1 is odd, so it lands on the first of two words.
    let input = format!("{}\n100000000000000000000001\no\nx\nn\n", path.display());

    let (result, output) = run_session(&input);

    assert_eq!(result.unwrap().games_won, 1);
    assert!(!output.contains("Input is not valid."));
    assert!(output.contains("o x"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_invalid_guesses_cost_nothing() {
    let path = write_word_list("hangman_it_invalid.txt", "ox");
    let input = format!("{}\n1\nox\n7\no\nO\nx\nn\n", path.display());

    let (result, output) = run_session(&input);

    assert_eq!(result.unwrap().games_won, 1);
    assert!(output.contains("X Please enter exactly one letter."));
    assert!(output.contains("X Only letters a-z are allowed."));
    assert!(output.contains("X You already guessed that letter."));
    assert_eq!(output.matches("Try again").count(), 3);
    assert!(!output.contains(":("));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_play_again_starts_fresh_game() {
    let path = write_word_list("hangman_it_again.txt", "ox cat");
    let input = format!(
        "{p}\n1\no\nx\nsure\ny\n{p}\n2\no\nc\na\nt\nN\n",
        p = path.display()
    );

    let (result, output) = run_session(&input);

    let summary = result.unwrap();
    assert_eq!(summary.games_played, 2);
    assert_eq!(summary.games_won, 2);
    assert!(output.contains("Please answer y or n."));
    // The second game starts with a clean slate even though "o" was played before.
    assert!(output.contains("Tries left: 5/6"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_empty_word_list_aborts_session() {
    let path = write_word_list("hangman_it_empty.txt", "\n   \n");
    let input = format!("{}\n1\n", path.display());

    let (result, output) = run_session(&input);

    assert!(matches!(result, Err(GameError::EmptyWordList)));
    assert!(!output.contains("Let's start!"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_end_of_input_mid_game_ends_session() {
    let path = write_word_list("hangman_it_eof.txt", "cat");
    let input = format!("{}\n1\nc\n", path.display());

    let (result, output) = run_session(&input);

    assert_eq!(result.unwrap(), SessionSummary::default());
    assert!(output.contains("c _ _"));
    assert!(output.contains("Goodbye!"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_secret_word_case_is_normalized() {
    let path = write_word_list("hangman_it_case.txt", "OX");
    let input = format!("{}\n1\nO\nX\nn\n", path.display());

    let (result, output) = run_session(&input);

    assert_eq!(result.unwrap().games_won, 1);
    assert!(output.contains("o x"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_word_source_and_state_machine_together() {
    let words = load_wordbank_from_str("alpha beta\ngamma");
    let secret = resolve_word(&words, 5).unwrap();
    assert_eq!(secret, "beta");

    let mut state = GameState::new(secret);
    for raw in ["B", "e", "t", "a"] {
        let letter = validate_guess(raw, state.guessed()).unwrap();
        state.apply_guess(letter).unwrap();
    }
    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.tries_remaining(), MAX_TRIES);
    assert_eq!(
        validate_guess("A", state.guessed()),
        Err(RejectionReason::AlreadyGuessed)
    );
}
