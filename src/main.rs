use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{Cli, CliInterface, parse_cli};
use word_scramble::dictionary::WordListDictionary;
use word_scramble::game_state::{GameInterface, game_loop};
use word_scramble::info_log;
use word_scramble::logging::init_logging;
use word_scramble::tui::TuiInterface;
use word_scramble::wordbank::{
    EMBEDDED_START_WORDS, WordbankError, load_wordbank_from_file, load_wordbank_from_str,
};

fn load_corpus(cli: &Cli) -> Vec<String> {
    match &cli.wordbank_path {
        // A missing corpus is not fatal: the session falls back to its default root word
        Some(path) => load_wordbank_from_file(path).unwrap_or_else(|e| {
            log::warn!("{e}; using the fallback root word");
            eprintln!("Warning: {e}");
            Vec::new()
        }),
        None => load_wordbank_from_str(EMBEDDED_START_WORDS),
    }
}

fn load_dictionary(cli: &Cli) -> Result<WordListDictionary, WordbankError> {
    match &cli.dictionary_path {
        Some(path) => WordListDictionary::from_file(&cli.language, path),
        None => Ok(WordListDictionary::discover(&cli.language)),
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Failed to open log file: {e}");
        return ExitCode::FAILURE;
    }

    let corpus = load_corpus(&cli);
    info_log!("Loaded {} root words", corpus.len());

    let dictionary = match load_dictionary(&cli) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Failed to load dictionary: {e}");
            return ExitCode::FAILURE;
        }
    };
    info_log!(
        "Dictionary has {} words for '{}'",
        dictionary.len(),
        dictionary.language()
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut interface: Box<dyn GameInterface> = if cli.plain {
        Box::new(CliInterface::new(io::stdin().lock()))
    } else {
        match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start the terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let session = game_loop(
        &corpus,
        dictionary,
        &cli.language,
        interface.as_mut(),
        &mut rng,
    );
    // Restore the terminal before printing the summary
    drop(interface);

    println!(
        "You found {} word(s) for a score of {}.",
        session.accepted_words().len(),
        session.score()
    );
    ExitCode::SUCCESS
}
