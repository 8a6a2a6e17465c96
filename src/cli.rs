use crate::game_state::{GameInterface, RoundView, UserAction};
use crate::info_log;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word Scramble: make as many words as you can from the root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary of accepted words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Language tag passed to the dictionary
    #[arg(short = 'l', long = "language", default_value = crate::dictionary::DEFAULT_LANGUAGE)]
    pub language: String,

    /// Seed for root word selection, for repeatable games
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Use the line-based interface instead of the TUI
    #[arg(long = "plain")]
    pub plain: bool,

    /// Write log records to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const EXIT_COMMAND: &str = "/exit";
const NEW_GAME_COMMAND: &str = "/next";

pub fn parse_input(line: &str) -> UserAction {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(EXIT_COMMAND) {
        UserAction::Exit
    } else if trimmed.eq_ignore_ascii_case(NEW_GAME_COMMAND) {
        UserAction::NewGame
    } else {
        UserAction::Submit(trimmed.to_string())
    }
}

pub fn display_new_round(round: &RoundView) {
    println!("\nRoot word: {}", round.root_word.to_uppercase());
    println!("Make words of three letters or more from its letters.");
}

pub fn display_accepted(word: &str, score_delta: usize, round: &RoundView) {
    println!("✓ {word} (+{score_delta}) - score {}", round.score);
}

pub fn display_rejection(title: &str, message: &str) {
    println!("✗ {title}: {message}");
}

pub fn display_words(round: &RoundView) {
    if round.accepted_words.is_empty() {
        return;
    }
    let words: Vec<String> = round
        .accepted_words
        .iter()
        .map(|w| format!("{w} ({})", w.chars().count()))
        .collect();
    println!("Your words: {}", words.join(", "));
}

pub fn display_exit_message(round: &RoundView) {
    println!(
        "Final score: {} from {} word(s). Exiting.",
        round.score,
        round.accepted_words.len()
    );
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
    fn display_new_round(&mut self, round: &RoundView) {
        display_new_round(round);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nEnter a word ('{NEW_GAME_COMMAND}' for a new root word, '{EXIT_COMMAND}' to quit):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // End of input ends the game
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => Some(parse_input(&input)),
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                info_log!("read_action() - treating read failure as exit");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_accepted(&mut self, word: &str, score_delta: usize, round: &RoundView) {
        display_accepted(word, score_delta, round);
        display_words(round);
    }

    fn display_rejection(&mut self, title: &str, message: &str, _round: &RoundView) {
        display_rejection(title, message);
    }

    fn display_exit_message(&mut self, round: &RoundView) {
        display_exit_message(round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::parse_from(["word-scramble"]);
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.dictionary_path, None);
        assert_eq!(cli.language, "en");
        assert_eq!(cli.seed, None);
        assert!(!cli.plain);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::parse_from([
            "word-scramble",
            "-i",
            "start.txt",
            "--dictionary",
            "/usr/share/dict/words",
            "-l",
            "en-GB",
            "--seed",
            "42",
            "--plain",
        ]);
        assert_eq!(cli.wordbank_path, Some(PathBuf::from("start.txt")));
        assert_eq!(
            cli.dictionary_path,
            Some(PathBuf::from("/usr/share/dict/words"))
        );
        assert_eq!(cli.language, "en-GB");
        assert_eq!(cli.seed, Some(42));
        assert!(cli.plain);
    }

    #[test]
    fn test_parse_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["word-scramble", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_parse_input_commands() {
        assert_eq!(parse_input("/exit\n"), UserAction::Exit);
        assert_eq!(parse_input("  /EXIT  "), UserAction::Exit);
        assert_eq!(parse_input("/next"), UserAction::NewGame);
        assert_eq!(parse_input("/Next\n"), UserAction::NewGame);
    }

    #[test]
    fn test_parse_input_words_are_submissions() {
        assert_eq!(
            parse_input("  Silk \n"),
            UserAction::Submit("Silk".to_string())
        );
        // Bare "exit" could be a real answer
        assert_eq!(parse_input("exit"), UserAction::Submit("exit".to_string()));
        assert_eq!(parse_input("\n"), UserAction::Submit(String::new()));
    }

    #[test]
    fn test_read_action_sequence() {
        let mut interface = CliInterface::new(Cursor::new("silk\n/next\n/exit\n"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Submit("silk".to_string()))
        );
        assert_eq!(interface.read_action(), Some(UserAction::NewGame));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_eof_exits() {
        let mut interface = CliInterface::new(Cursor::new(""));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_last_line_without_newline() {
        let mut interface = CliInterface::new(Cursor::new("worm"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Submit("worm".to_string()))
        );
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }
}
