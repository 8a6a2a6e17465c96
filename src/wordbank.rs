use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");
pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

#[derive(Debug, thiserror::Error)]
pub enum WordbankError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list {path} contains no usable words")]
    Empty { path: PathBuf },
}

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word)
    } else {
        None
    }
}

/// Dictionary entries that start with a capital are proper nouns ("Paris")
/// and never count as answers.
fn normalize_dictionary_line(line: &str) -> Option<String> {
    match line.trim().chars().next() {
        Some(first) if first.is_uppercase() => None,
        _ => normalize_line(line),
    }
}

fn read_lines<P: AsRef<Path>>(
    path: P,
    normalize: fn(&str) -> Option<String>,
) -> Result<Vec<String>, WordbankError> {
    let path = path.as_ref();
    let io_err = |source| WordbankError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line.map_err(io_err)?) {
            words.push(word);
        }
    }
    Ok(words)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

/// Read a newline-delimited word list. Blank lines and entries with
/// non-letters (hyphenations, possessives) are skipped; an empty result is
/// returned as-is, so callers decide whether that is a failure.
pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordbankError> {
    read_lines(path, normalize_line)
}

/// Like [`load_wordbank_from_str`], but capitalized entries are dropped.
pub fn load_dictionary_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_dictionary_line).collect()
}

/// Read a dictionary word list, dropping capitalized entries. An empty
/// result is an error, since it would reject every word.
pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordbankError> {
    let words = read_lines(&path, normalize_dictionary_line)?;
    if words.is_empty() {
        return Err(WordbankError::Empty {
            path: path.as_ref().to_path_buf(),
        });
    }
    Ok(words)
}
