/// Dictionary loading: reads word definitions from RON and classifies
/// each word into lexical roles.

use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::word::{LexicalRole, Word};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Words that are always pronouns regardless of their definitions.
pub const PRONOUNS: [&str; 4] = ["mi", "sina", "ona", "ni"];
/// Words that are always particles regardless of their definitions.
pub const FORCED_PARTICLES: [&str; 1] = ["seme"];
/// Alternate spellings already covered by another entry.
pub const SKIPPED_WORDS: [&str; 1] = ["ali"];
/// Usage category of entries left out of the lexicon.
pub const OBSCURE_USAGE: &str = "obscure";

#[derive(Debug, Deserialize)]
#[serde(rename = "Entry")]
struct RonEntry {
    #[serde(default)]
    definitions: Vec<String>,
    #[serde(default)]
    usage: Option<String>,
}

/// Load and classify a dictionary from a RON file.
pub fn load_from_ron(path: &Path) -> Result<Vec<Word>, DictionaryError> {
    let contents = std::fs::read_to_string(path)?;
    parse_ron(&contents)
}

/// Parse a dictionary from a RON string.
///
/// Obscure entries and alternate spellings are dropped. The result is
/// sorted by word.
pub fn parse_ron(input: &str) -> Result<Vec<Word>, DictionaryError> {
    let raw: BTreeMap<String, RonEntry> = ron::from_str(input)?;
    let mut words = Vec::with_capacity(raw.len());

    for (text, entry) in raw {
        if entry.usage.as_deref() == Some(OBSCURE_USAGE) || SKIPPED_WORDS.contains(&text.as_str()) {
            continue;
        }
        let roles = classify(&text, &entry.definitions);
        words.push(Word::new(text, roles));
    }

    info!("imported {} words", words.len());
    Ok(words)
}

/// Roles for `word` given its dictionary definitions.
///
/// Pronouns and forced particles ignore their definitions. Every other
/// definition contributes the role named by its leading tag; a word
/// without definitions gets no roles.
pub fn classify(word: &str, definitions: &[String]) -> Vec<LexicalRole> {
    if PRONOUNS.contains(&word) {
        return vec![LexicalRole::Pronoun];
    }
    if FORCED_PARTICLES.contains(&word) {
        return vec![LexicalRole::Particle];
    }

    let mut roles: Vec<LexicalRole> = definitions
        .iter()
        .map(|definition| LexicalRole::classify_definition(definition))
        .collect();
    roles.sort();
    roles.dedup();
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn pronouns_ignore_definitions() {
        let roles = classify("mi", &defs(&["(noun) I, me, we, us"]));
        assert_eq!(roles, vec![LexicalRole::Pronoun]);
    }

    #[test]
    fn seme_is_a_particle() {
        let roles = classify("seme", &defs(&["(noun) what? which?"]));
        assert_eq!(roles, vec![LexicalRole::Particle]);
    }

    #[test]
    fn definitions_collapse_to_unique_roles() {
        let roles = classify(
            "lon",
            &defs(&[
                "(preposition) located at, present at",
                "(noun) truth, life",
                "(verb) to exist",
            ]),
        );
        assert_eq!(roles, vec![LexicalRole::Content, LexicalRole::Preposition]);
    }

    #[test]
    fn word_without_definitions_has_no_roles() {
        assert!(classify("kijetesantakalu", &[]).is_empty());
    }

    #[test]
    fn parse_skips_obscure_and_alternates() {
        let input = r#"{
            "moku": Entry(definitions: ["(verb) to eat", "(noun) food"], usage: Some("core")),
            "ali": Entry(definitions: ["(noun) everything"], usage: Some("core")),
            "kijetesantakalu": Entry(definitions: ["(noun) raccoon"], usage: Some("obscure")),
            "ken": (definitions: ["(preverb) can", "(noun) possibility"]),
        }"#;
        let words = parse_ron(input).unwrap();
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["ken", "moku"]);
        assert!(words[0].has_role(LexicalRole::Preverb));
        assert!(words[0].has_role(LexicalRole::Content));
        assert_eq!(words[1].sorted_roles(), vec![LexicalRole::Content]);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let err = parse_ron("{ \"moku\": Entry(definitions: [1, 2]) }").unwrap_err();
        assert!(matches!(err, DictionaryError::Ron(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_ron(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io(_)));
    }
}
