//! Real-word checking.
//!
//! The game only needs a yes/no answer for "is this a word in language X",
//! so the seam is a single-method trait. [`WordListDictionary`] answers it
//! from a plain word list; tests can pass a closure instead.

use crate::info_log;
use crate::wordbank::{
    EMBEDDED_DICTIONARY, WordbankError, load_dictionary_from_file, load_dictionary_from_str,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Language tag passed to the checker unless configured otherwise.
pub const DEFAULT_LANGUAGE: &str = "en";

const APP_DIR_NAME: &str = "word-scramble";
const USER_DICTIONARY_STEM: &str = "dictionary";
const SYSTEM_DICTIONARY_PATH: &str = "/usr/share/dict/words";

pub trait WordChecker {
    /// Whether `word` (already lowercased and trimmed) is a recognized word
    /// in `language`.
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

impl<F> WordChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// A dictionary for a single language backed by an in-memory word set.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language: language.to_string(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The English word list compiled into the binary.
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, load_dictionary_from_str(EMBEDDED_DICTIONARY))
    }

    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, WordbankError> {
        let words = load_dictionary_from_file(&path)?;
        info_log!(
            "Loaded {} dictionary words from {}",
            words.len(),
            path.as_ref().display()
        );
        Ok(Self::new(language, words))
    }

    /// Find a dictionary for `language`.
    ///
    /// A user list (`dictionary.<lang>.txt` in the config directory) is
    /// tagged with the requested language. The system word list and the
    /// embedded list are English and keep that tag, so asking for another
    /// language without a user list recognizes nothing.
    pub fn discover(language: &str) -> Self {
        discover_from(
            language,
            user_dictionary_path(language).as_deref(),
            Path::new(SYSTEM_DICTIONARY_PATH),
        )
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordChecker for WordListDictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        same_language(&self.language, language) && self.words.contains(word)
    }
}

/// Compare language tags by primary subtag, so `en` matches `en-US` and `en_GB`.
fn same_language(a: &str, b: &str) -> bool {
    primary_subtag(a) == primary_subtag(b)
}

fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// `<config dir>/word-scramble/dictionary.<lang>.txt`, if the platform has a
/// config dir.
pub fn user_dictionary_path(language: &str) -> Option<PathBuf> {
    let file = format!("{USER_DICTIONARY_STEM}.{}.txt", primary_subtag(language));
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(file))
}

fn discover_from(language: &str, user_path: Option<&Path>, system_path: &Path) -> WordListDictionary {
    if let Some(path) = user_path.filter(|p| p.is_file()) {
        match WordListDictionary::from_file(language, path) {
            Ok(dictionary) => return dictionary,
            Err(e) => log::warn!("Skipping dictionary: {e}"),
        }
    }

    if same_language(language, DEFAULT_LANGUAGE) && system_path.is_file() {
        match WordListDictionary::from_file(DEFAULT_LANGUAGE, system_path) {
            Ok(dictionary) => return dictionary,
            Err(e) => log::warn!("Skipping dictionary: {e}"),
        }
    }

    if !same_language(language, DEFAULT_LANGUAGE) {
        log::warn!("No '{language}' dictionary found; no words will be recognized");
    }
    info_log!("Using embedded word list");
    WordListDictionary::embedded()
}
