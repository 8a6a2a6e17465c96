use crate::dictionary::WordChecker;
use crate::root_word::pick_root_word_with;
use crate::session::{GameSession, RejectionReason, ValidationOutcome};
use crate::{debug_log, info_log};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewGame,
    Exit,
}

/// Snapshot of the session handed to the front end after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView<'a> {
    pub root_word: &'a str,
    pub accepted_words: &'a [String],
    pub score: usize,
}

impl<'a> RoundView<'a> {
    fn of<C: WordChecker>(session: &'a GameSession<C>) -> Option<Self> {
        Some(Self {
            root_word: session.root_word()?,
            accepted_words: session.accepted_words(),
            score: session.score(),
        })
    }
}

/// Front-end side of the game loop. Implemented by the line-based CLI and
/// the TUI.
pub trait GameInterface {
    fn display_new_round(&mut self, round: &RoundView);
    /// `None` means nothing usable was read; the loop asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, word: &str, score_delta: usize, round: &RoundView);
    fn display_rejection(&mut self, title: &str, message: &str, round: &RoundView);
    fn display_exit_message(&mut self, round: &RoundView);
}

/// Title and message shown to the player for a rejected word.
pub fn describe_rejection(reason: RejectionReason, root_word: &str) -> (&'static str, String) {
    match reason {
        RejectionReason::TooShort => (
            "Word too short",
            "Words must be at least three letters long.".to_string(),
        ),
        RejectionReason::IsRootWord => (
            "That's the root word",
            format!("You can't just reuse '{root_word}'!"),
        ),
        RejectionReason::AlreadyUsed => ("Word used already", "Be more original!".to_string()),
        RejectionReason::NotDerivable => (
            "Word not possible",
            format!("You can't spell that word from '{root_word}'!"),
        ),
        RejectionReason::NotRecognizedWord => (
            "Word not recognized",
            "You can't just make them up, you know!".to_string(),
        ),
    }
}

/// Play rounds until the interface asks to exit or runs out of input.
///
/// Each round draws a root word from `corpus` with `rng`. Returns the final
/// session so callers can inspect the last round.
pub fn game_loop<C, I, R>(
    corpus: &[String],
    checker: C,
    language: &str,
    interface: &mut I,
    rng: &mut R,
) -> GameSession<C>
where
    C: WordChecker,
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let mut session = GameSession::with_language(checker, language);
    start_round(&mut session, corpus, interface, rng);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                if let Some(round) = RoundView::of(&session) {
                    interface.display_exit_message(&round);
                }
                break;
            }
            UserAction::NewGame => start_round(&mut session, corpus, interface, rng),
            UserAction::Submit(input) => handle_submission(&mut session, &input, interface),
        }
    }

    info_log!(
        "Game over: {} words, score {}",
        session.accepted_words().len(),
        session.score()
    );
    session
}

fn start_round<C, I, R>(session: &mut GameSession<C>, corpus: &[String], interface: &mut I, rng: &mut R)
where
    C: WordChecker,
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let root_word = pick_root_word_with(corpus, rng);
    info_log!("New round: root word '{}'", root_word);
    session.start_game(&root_word);
    if let Some(round) = RoundView::of(session) {
        interface.display_new_round(&round);
    }
}

fn handle_submission<C, I>(session: &mut GameSession<C>, input: &str, interface: &mut I)
where
    C: WordChecker,
    I: GameInterface + ?Sized,
{
    let outcome = session.submit(input);
    let Some(round) = RoundView::of(session) else {
        return;
    };

    match outcome {
        ValidationOutcome::Accepted { word, score_delta } => {
            interface.display_accepted(&word, score_delta, &round);
        }
        ValidationOutcome::Rejected(reason) => {
            let (title, message) = describe_rejection(reason, round.root_word);
            interface.display_rejection(title, &message, &round);
        }
        ValidationOutcome::Ignored => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashSet, VecDeque};

    /// Scripted interface that records what the loop showed it.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        rounds: Vec<String>,
        accepted: Vec<(String, usize, usize)>,
        rejections: Vec<String>,
        exited_with_score: Option<usize>,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_new_round(&mut self, round: &RoundView) {
            self.rounds.push(round.root_word.to_string());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_accepted(&mut self, word: &str, score_delta: usize, round: &RoundView) {
            self.accepted.push((word.to_string(), score_delta, round.score));
        }

        fn display_rejection(&mut self, title: &str, _message: &str, _round: &RoundView) {
            self.rejections.push(title.to_string());
        }

        fn display_exit_message(&mut self, round: &RoundView) {
            self.exited_with_score = Some(round.score);
        }
    }

    fn submit(word: &str) -> Option<UserAction> {
        Some(UserAction::Submit(word.to_string()))
    }

    fn checker(word: &str, _language: &str) -> bool {
        ["silk", "worm", "milk"].contains(&word)
    }

    #[test]
    fn test_loop_plays_a_round() {
        let corpus = vec!["silkworm".to_string()];
        let mut interface = ScriptedInterface::new(vec![
            submit("silk"),
            submit("hi"),
            None,
            submit("worm"),
            submit("silk"),
            Some(UserAction::Exit),
        ]);
        let mut rng = StdRng::seed_from_u64(0);

        let session = game_loop(&corpus, checker, "en", &mut interface, &mut rng);

        assert_eq!(interface.rounds, vec!["silkworm"]);
        assert_eq!(
            interface.accepted,
            vec![("silk".to_string(), 4, 4), ("worm".to_string(), 4, 8)]
        );
        assert_eq!(
            interface.rejections,
            vec!["Word too short", "Word used already"]
        );
        assert_eq!(interface.exited_with_score, Some(8));
        assert_eq!(session.score(), 8);
    }

    #[test]
    fn test_blank_submission_shows_nothing() {
        let corpus = vec!["silkworm".to_string()];
        let mut interface = ScriptedInterface::new(vec![submit("   "), Some(UserAction::Exit)]);
        let mut rng = StdRng::seed_from_u64(0);

        game_loop(&corpus, checker, "en", &mut interface, &mut rng);

        assert!(interface.accepted.is_empty());
        assert!(interface.rejections.is_empty());
    }

    #[test]
    fn test_new_game_resets_score() {
        let corpus = vec!["silkworm".to_string()];
        let mut interface = ScriptedInterface::new(vec![
            submit("silk"),
            Some(UserAction::NewGame),
            submit("silk"),
            Some(UserAction::Exit),
        ]);
        let mut rng = StdRng::seed_from_u64(0);

        let session = game_loop(&corpus, checker, "en", &mut interface, &mut rng);

        assert_eq!(interface.rounds.len(), 2);
        assert_eq!(interface.accepted.len(), 2);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn test_empty_corpus_uses_fallback() {
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        let mut rng = StdRng::seed_from_u64(3);

        game_loop(&[], checker, "en", &mut interface, &mut rng);

        assert_eq!(interface.rounds, vec!["silkworm"]);
    }

    #[test]
    fn test_rejection_descriptions_are_distinct() {
        let reasons = [
            RejectionReason::TooShort,
            RejectionReason::IsRootWord,
            RejectionReason::AlreadyUsed,
            RejectionReason::NotDerivable,
            RejectionReason::NotRecognizedWord,
        ];
        let titles: HashSet<_> = reasons
            .iter()
            .map(|&r| describe_rejection(r, "silkworm").0)
            .collect();
        assert_eq!(titles.len(), reasons.len());

        let (_, message) = describe_rejection(RejectionReason::NotDerivable, "silkworm");
        assert!(message.contains("silkworm"));
    }
}
