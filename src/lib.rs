// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod root_word;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{DEFAULT_LANGUAGE, WordChecker, WordListDictionary};
pub use game_state::{GameInterface, UserAction, describe_rejection, game_loop};
pub use root_word::{FALLBACK_ROOT_WORD, pick_root_word, pick_root_word_with};
pub use session::{GameSession, MIN_WORD_LENGTH, RejectionReason, ValidationOutcome, is_derivable};
pub use wordbank::{WordbankError, load_wordbank_from_file, load_wordbank_from_str};
