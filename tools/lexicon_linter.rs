/// Lexicon linter: checks a dictionary file before it is served.
///
/// Usage: lexicon_linter <dictionary.ron | dir>

use linja_engine::core::dictionary;
use linja_engine::core::lexicon::{LexiconIndex, LOCATIVE_PARTICLE};
use linja_engine::core::phrase::NEGATION_PARTICLE;
use linja_engine::{LexicalRole, Word};
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: lexicon_linter <dictionary.ron | dir>");
        process::exit(0);
    }

    let lexicon_path = Path::new(&args[1]);
    let mut words = Vec::new();

    if lexicon_path.is_file() {
        match dictionary::load_from_ron(lexicon_path) {
            Ok(loaded) => words.extend(loaded),
            Err(e) => {
                eprintln!("ERROR: Failed to load dictionary file: {}", e);
                process::exit(1);
            }
        }
    } else if lexicon_path.is_dir() {
        load_dictionaries_recursive(lexicon_path, &mut words);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", args[1]);
        process::exit(1);
    }

    println!("Loaded {} words", words.len());

    let (errors, warnings) = lint_words(&words);

    println!("\n=== Lexicon Lint Report ===\n");

    for role in LexicalRole::ALL {
        let count = words.iter().filter(|w| w.has_role(role)).count();
        println!("  {:<12} {}", role.name(), count);
    }
    println!();

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_dictionaries_recursive(dir: &Path, words: &mut Vec<Word>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_dictionaries_recursive(&path, words);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                match dictionary::load_from_ron(&path) {
                    Ok(loaded) => {
                        println!("  Loaded: {}", path.display());
                        words.extend(loaded);
                    }
                    Err(e) => {
                        eprintln!("  ERROR loading {}: {}", path.display(), e);
                    }
                }
            }
        }
    }
}

fn lint_words(words: &[Word]) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Anything the engine itself would refuse
    if let Err(e) = LexiconIndex::new(words) {
        errors.push(e.to_string());
    }

    let mut seen = std::collections::HashSet::new();
    for word in words {
        if !seen.insert(word.text.as_str()) {
            warnings.push(format!("Word '{}' is defined more than once", word.text));
        }

        if word.roles.is_empty() {
            warnings.push(format!(
                "Word '{}' has no roles and will never be generated",
                word.text
            ));
        }

        if word.text.contains(char::is_whitespace) {
            errors.push(format!(
                "Word '{}' contains whitespace and would break phrase boundaries",
                word.text
            ));
        }
    }

    if !words
        .iter()
        .any(|w| w.text == LOCATIVE_PARTICLE && w.has_role(LexicalRole::Preposition))
    {
        warnings.push(format!(
            "No '{}' preposition; sentences will never use the locative",
            LOCATIVE_PARTICLE
        ));
    }

    if words
        .iter()
        .any(|w| w.text == NEGATION_PARTICLE && w.has_role(LexicalRole::Content))
    {
        warnings.push(format!(
            "'{}' is a content word; generated phrases may repeat the negation particle",
            NEGATION_PARTICLE
        ));
    }

    (errors, warnings)
}
