/// Role-partitioned, read-only index over the lexicon.

use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::schema::word::{LexicalRole, Word};

/// The locative preposition, limited to one use per sentence.
pub const LOCATIVE_PARTICLE: &str = "lon";

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("configuration error: no words hold the required role '{0}'")]
    MissingRole(LexicalRole),
    #[error("configuration error: 'lon' is the only preposition in the lexicon")]
    NoNonLocativePreposition,
}

/// Words grouped by role, built once and shared read-only by every
/// generation unit.
#[derive(Debug, Clone)]
pub struct LexiconIndex {
    by_role: FxHashMap<LexicalRole, Vec<String>>,
    non_locative_prepositions: Vec<String>,
    word_count: usize,
}

impl LexiconIndex {
    /// Group each word under every role it holds.
    ///
    /// Fails when any of `Content`, `Preverb`, `Preposition` or `Pronoun`
    /// ends up empty, or when the locative particle is the only preposition.
    pub fn new(words: &[Word]) -> Result<LexiconIndex, LexiconError> {
        let mut by_role: FxHashMap<LexicalRole, Vec<String>> = FxHashMap::default();

        for word in words {
            for role in &word.roles {
                by_role.entry(*role).or_default().push(word.text.clone());
            }
        }

        for role in LexicalRole::REQUIRED {
            if by_role.get(&role).map_or(true, Vec::is_empty) {
                return Err(LexiconError::MissingRole(role));
            }
        }

        let non_locative_prepositions: Vec<String> = by_role
            .get(&LexicalRole::Preposition)
            .into_iter()
            .flatten()
            .filter(|text| text.as_str() != LOCATIVE_PARTICLE)
            .cloned()
            .collect();

        if non_locative_prepositions.is_empty() {
            return Err(LexiconError::NoNonLocativePreposition);
        }

        debug!(
            "indexed {} words: {}",
            words.len(),
            LexicalRole::ALL
                .iter()
                .map(|role| format!("{}={}", role, by_role.get(role).map_or(0, Vec::len)))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(LexiconIndex {
            by_role,
            non_locative_prepositions,
            word_count: words.len(),
        })
    }

    /// Words holding `role`, in lexicon order. Empty for an unused role.
    pub fn words(&self, role: LexicalRole) -> &[String] {
        self.by_role.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every preposition except the locative particle.
    pub fn non_locative_prepositions(&self) -> &[String] {
        &self.non_locative_prepositions
    }

    /// Size of the word list the index was built from.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}
