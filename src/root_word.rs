use crate::debug_log;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Root word used when the corpus has nothing to offer.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Pick a root word using the thread-local RNG.
pub fn pick_root_word(corpus: &[String]) -> String {
    pick_root_word_with(corpus, &mut rand::rng())
}

/// Pick a root word uniformly at random from `corpus`, or
/// [`FALLBACK_ROOT_WORD`] if it is empty. Pass a seeded RNG for repeatable
/// picks.
pub fn pick_root_word_with<R: Rng + ?Sized>(corpus: &[String], rng: &mut R) -> String {
    match corpus.choose(rng) {
        Some(word) => {
            debug_log!("Picked root word '{}' from {} entries", word, corpus.len());
            word.clone()
        }
        None => {
            debug_log!("Empty corpus, falling back to '{}'", FALLBACK_ROOT_WORD);
            FALLBACK_ROOT_WORD.to_string()
        }
    }
}
