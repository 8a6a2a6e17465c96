//! Word validation and scoring for one player's round.
//!
//! A [`GameSession`] is `Idle` until [`GameSession::start_game`] gives it a
//! root word. From then on every [`GameSession::submit`] runs the candidate
//! through the rules below, in order, stopping at the first one it breaks:
//!
//! 1. at least [`MIN_WORD_LENGTH`] characters
//! 2. not the root word itself
//! 3. not already accepted this round
//! 4. spellable from the root word's letters, each letter used at most as
//!    often as it appears in the root
//! 5. recognized by the [`WordChecker`]
//!
//! An accepted word scores one point per character.

use crate::debug_log;
use crate::dictionary::{DEFAULT_LANGUAGE, WordChecker};

pub const MIN_WORD_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    TooShort,
    IsRootWord,
    AlreadyUsed,
    NotDerivable,
    NotRecognizedWord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted { word: String, score_delta: usize },
    Rejected(RejectionReason),
    /// Blank input, or no round in progress. Nothing changed.
    Ignored,
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct GameSession<C> {
    root_word: Option<String>,
    accepted_words: Vec<String>,
    score: usize,
    language: String,
    checker: C,
}

impl<C: WordChecker> GameSession<C> {
    /// An idle session that checks words in [`DEFAULT_LANGUAGE`].
    pub fn new(checker: C) -> Self {
        Self::with_language(checker, DEFAULT_LANGUAGE)
    }

    pub fn with_language(checker: C, language: &str) -> Self {
        Self {
            root_word: None,
            accepted_words: Vec::new(),
            score: 0,
            language: language.to_string(),
            checker,
        }
    }

    /// Begin a fresh round on `root_word`, discarding the previous round's
    /// words and score.
    pub fn start_game(&mut self, root_word: &str) {
        let root_word = normalize(root_word);
        debug_log!("Starting round with root word '{}'", root_word);
        self.root_word = Some(root_word);
        self.accepted_words.clear();
        self.score = 0;
    }

    pub fn submit(&mut self, raw_input: &str) -> ValidationOutcome {
        let Some(root_word) = self.root_word.as_deref() else {
            debug_log!("submit() called with no round in progress");
            return ValidationOutcome::Ignored;
        };

        let answer = normalize(raw_input);
        if answer.is_empty() {
            return ValidationOutcome::Ignored;
        }

        if let Err(reason) = self.check(root_word, &answer) {
            debug_log!("Rejected '{}': {:?}", answer, reason);
            return ValidationOutcome::Rejected(reason);
        }

        let score_delta = answer.chars().count();
        self.score += score_delta;
        self.accepted_words.insert(0, answer.clone());
        debug_log!("Accepted '{}' (+{}), score {}", answer, score_delta, self.score);

        ValidationOutcome::Accepted {
            word: answer,
            score_delta,
        }
    }

    fn check(&self, root_word: &str, answer: &str) -> Result<(), RejectionReason> {
        if answer.chars().count() < MIN_WORD_LENGTH {
            return Err(RejectionReason::TooShort);
        }
        if answer == root_word {
            return Err(RejectionReason::IsRootWord);
        }
        if self.accepted_words.iter().any(|w| w == answer) {
            return Err(RejectionReason::AlreadyUsed);
        }
        if !is_derivable(answer, root_word) {
            return Err(RejectionReason::NotDerivable);
        }
        if !self.checker.is_recognized_word(answer, &self.language) {
            return Err(RejectionReason::NotRecognizedWord);
        }
        Ok(())
    }

    pub fn root_word(&self) -> Option<&str> {
        self.root_word.as_deref()
    }

    /// Accepted words, most recent first.
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_in_round(&self) -> bool {
        self.root_word.is_some()
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Whether every letter of `word` can be drawn from `root`, using each of the
/// root's letters at most once.
pub fn is_derivable(word: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();
    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}
