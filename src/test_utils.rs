//! Helpers for driving the engine deterministically in tests.

use std::sync::Arc;

use crate::core::random::RandomSource;
use crate::schema::word::{LexicalRole, Word};

/// Replays a fixed script of draws, cycling when it runs out.
///
/// Each scripted value is reduced modulo the requested bound, so a script
/// written for one lexicon size still yields in-range draws for another.
/// A fork restarts the script from the beginning.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Arc<[usize]>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, n: usize) -> usize {
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value % n
    }

    fn fork(&mut self) -> Self {
        Self {
            draws: Arc::clone(&self.draws),
            cursor: 0,
        }
    }
}

/// A word holding a single role.
pub fn word(text: &str, role: LexicalRole) -> Word {
    Word::new(text, [role])
}

/// Minimal lexicon: Content {moku, tomo}, Pronoun {mi}, Preverb {ken},
/// Preposition {lon, tan}.
pub fn small_lexicon() -> Vec<Word> {
    vec![
        word("moku", LexicalRole::Content),
        word("tomo", LexicalRole::Content),
        word("mi", LexicalRole::Pronoun),
        word("ken", LexicalRole::Preverb),
        word("lon", LexicalRole::Preposition),
        word("tan", LexicalRole::Preposition),
    ]
}

/// A richer lexicon with every pronoun, several content words and
/// prepositions, and a word that holds more than one role.
pub fn sample_lexicon() -> Vec<Word> {
    let mut words = vec![
        word("mi", LexicalRole::Pronoun),
        word("sina", LexicalRole::Pronoun),
        word("ona", LexicalRole::Pronoun),
        word("ni", LexicalRole::Pronoun),
        word("ken", LexicalRole::Preverb),
        word("wile", LexicalRole::Preverb),
        word("tan", LexicalRole::Preposition),
        word("tawa", LexicalRole::Preposition),
        word("kepeken", LexicalRole::Preposition),
        word("sama", LexicalRole::Preposition),
        word("lon", LexicalRole::Preposition),
        word("pi", LexicalRole::Particle),
    ];
    for text in [
        "jan", "moku", "tomo", "kili", "telo", "soweli", "waso", "lipu", "pona", "suli",
    ] {
        words.push(word(text, LexicalRole::Content));
    }
    words.push(Word::new(
        "kama",
        [LexicalRole::Content, LexicalRole::Preverb],
    ));
    words
}
