use crate::game_state::{GameInterface, MAX_ATTEMPTS, POINTS_PER_CORRECT, RoundInfo, UserAction};
use crate::debug_log;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word Jumble: unscramble the letters to find the word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (defaults to words.txt)
    #[arg(short = 'i', long = "input")]
    pub word_list_path: Option<PathBuf>,

    /// Seed for a reproducible sequence of words and jumbles
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Valid(String),
    Invalid,
    Skip,
    Exit,
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nYour guess ('skip' for a new word, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return GuessInput::Exit,
        Ok(_) => {}
        Err(e) => {
            debug_log!("read_guess() - read error: {}", e);
            return GuessInput::Exit;
        }
    }
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "exit" | "quit" => GuessInput::Exit,
        "skip" | "next" => GuessInput::Skip,
        "" => {
            println!("Please type a word.");
            GuessInput::Invalid
        }
        _ => GuessInput::Valid(input.to_string()),
    }
}

pub fn display_welcome(word_count: usize) {
    println!("Welcome to Word Jumble!");
    println!(
        "Loaded {word_count} words. Each word is worth {POINTS_PER_CORRECT} points and you get {MAX_ATTEMPTS} tries."
    );
}

pub fn display_round(info: &RoundInfo) {
    println!(
        "\nWord {} of {} | Score: {} | Tries left: {}",
        info.round, info.total, info.score, info.attempts_left
    );
    println!("Unscramble: {}", info.jumbled);
}

pub fn display_correct(word: &str, score: u32) {
    println!("Correct! The word was '{word}'. Score: {score}");
}

pub fn display_incorrect(attempts_left: u32) {
    let plural = if attempts_left == 1 { "try" } else { "tries" };
    println!("Not quite. {attempts_left} {plural} left.");
}

pub fn display_reveal(word: &str) {
    println!("The word was '{word}'.");
}

pub fn display_exhausted(score: u32) {
    println!("\nNo words left! Final score: {score}");
}

pub fn display_exit_message(score: u32) {
    println!("Exiting. Final score: {score}");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_welcome(&mut self, word_count: usize) {
        display_welcome(word_count);
    }

    fn display_round(&mut self, info: &RoundInfo) {
        display_round(info);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Valid(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Skip => Some(UserAction::Skip),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::Invalid => None,
        }
    }

    fn display_correct(&mut self, word: &str, score: u32) {
        display_correct(word, score);
    }

    fn display_incorrect(&mut self, attempts_left: u32) {
        display_incorrect(attempts_left);
    }

    fn display_reveal(&mut self, word: &str) {
        display_reveal(word);
    }

    fn display_exhausted(&mut self, score: u32) {
        display_exhausted(score);
    }

    fn display_exit_message(&mut self, score: u32) {
        display_exit_message(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["word-jumble"]).unwrap();
        assert_eq!(cli.word_list_path, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.tui);
    }

    #[test]
    fn test_parse_cli_all_options() {
        let cli =
            Cli::try_parse_from(["word-jumble", "-i", "custom.txt", "--seed", "42", "--tui"])
                .unwrap();
        assert_eq!(cli.word_list_path, Some(PathBuf::from("custom.txt")));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.tui);
    }

    #[test]
    fn test_parse_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["word-jumble", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_read_guess_valid_word() {
        let mut reader = Cursor::new("Planet\n");
        match read_guess(&mut reader) {
            GuessInput::Valid(word) => assert_eq!(word, "Planet"),
            _ => panic!("Expected Valid guess"),
        }
    }

    #[test]
    fn test_read_guess_trims_whitespace() {
        let mut reader = Cursor::new("   cat  \n");
        match read_guess(&mut reader) {
            GuessInput::Valid(word) => assert_eq!(word, "cat"),
            _ => panic!("Expected Valid guess"),
        }
    }

    #[test]
    fn test_read_guess_exit_commands() {
        for input in ["exit\n", "EXIT\n", "quit\n", "Quit\n"] {
            let mut reader = Cursor::new(input);
            assert!(matches!(read_guess(&mut reader), GuessInput::Exit), "{input:?}");
        }
    }

    #[test]
    fn test_read_guess_skip_commands() {
        for input in ["skip\n", "SKIP\n", "next\n"] {
            let mut reader = Cursor::new(input);
            assert!(matches!(read_guess(&mut reader), GuessInput::Skip), "{input:?}");
        }
    }

    #[test]
    fn test_read_guess_blank_line_is_invalid() {
        let mut reader = Cursor::new("   \n");
        assert!(matches!(read_guess(&mut reader), GuessInput::Invalid));
    }

    #[test]
    fn test_read_guess_eof_exits() {
        let mut reader = Cursor::new("");
        assert!(matches!(read_guess(&mut reader), GuessInput::Exit));
    }

    #[test]
    fn test_cli_interface_maps_actions() {
        let mut interface = CliInterface::new(Cursor::new("cat\n\nskip\nexit\n"));
        assert_eq!(
            interface.read_guess(),
            Some(UserAction::Guess("cat".to_string()))
        );
        assert_eq!(interface.read_guess(), None);
        assert_eq!(interface.read_guess(), Some(UserAction::Skip));
        assert_eq!(interface.read_guess(), Some(UserAction::Exit));
        assert_eq!(interface.read_guess(), Some(UserAction::Exit));
    }
}
