/// Sentence composition: subject, verb phrase, optional object and
/// prepositional phrases, rendered into surface text.

use crate::core::lexicon::{LexiconIndex, LOCATIVE_PARTICLE};
use crate::core::phrase::PhraseGenerator;
use crate::core::random::{chance, pick, GenerationError, Odds, RandomSource};
use crate::schema::sentence::Sentence;

/// Marks the predicate after any subject other than `mi` or `sina`.
pub const PREDICATE_MARKER: &str = "li";
/// Introduces the direct object.
pub const OBJECT_MARKER: &str = "e";
/// Subjects that take the verb directly, without the predicate marker.
pub const UNMARKED_SUBJECTS: [&str; 2] = ["mi", "sina"];

/// The sentence has a direct object.
pub const OBJECT_ODDS: Odds = (2, 3);
/// The sentence has prepositional phrases.
pub const PREPOSITION_ODDS: Odds = (1, 3);
/// Upper bound on prepositional phrases; the count is uniform in `1..=MAX`.
pub const MAX_PREPOSITIONAL_PHRASES: usize = 2;
/// An unused locative particle is chosen for the next phrase.
pub const LOCATIVE_ODDS: Odds = (1, 2);

/// Composes complete sentences from a lexicon index.
#[derive(Debug, Clone, Copy)]
pub struct SentenceComposer<'a> {
    index: &'a LexiconIndex,
    phrases: PhraseGenerator<'a>,
}

impl<'a> SentenceComposer<'a> {
    pub fn new(index: &'a LexiconIndex) -> Self {
        Self {
            index,
            phrases: PhraseGenerator::new(index),
        }
    }

    /// Generate one sentence. Draws happen in a fixed order: subject, verb,
    /// object, then prepositional phrases.
    pub fn compose<R>(&self, rng: &mut R) -> Result<Sentence, GenerationError>
    where
        R: RandomSource + ?Sized,
    {
        let subject = self.phrases.noun(rng)?;
        let verb = self.phrases.verb(rng)?.text;

        let object = if chance(rng, OBJECT_ODDS) {
            Some(self.phrases.noun(rng)?)
        } else {
            None
        };

        let prepositional_phrases = self.prepositional_phrases(rng)?;

        Ok(assemble(subject, verb, object, prepositional_phrases))
    }

    fn prepositional_phrases<R>(&self, rng: &mut R) -> Result<Vec<String>, GenerationError>
    where
        R: RandomSource + ?Sized,
    {
        if !chance(rng, PREPOSITION_ODDS) {
            return Ok(Vec::new());
        }

        let count = 1 + rng.below(MAX_PREPOSITIONAL_PHRASES);
        let mut phrases = Vec::with_capacity(count);
        let mut used_locative = false;

        for _ in 0..count {
            let preposition = if !used_locative && chance(rng, LOCATIVE_ODDS) {
                used_locative = true;
                LOCATIVE_PARTICLE
            } else {
                pick(rng, self.index.non_locative_prepositions())?.as_str()
            };
            let noun = self.phrases.noun(rng)?;
            phrases.push(format!("{} {}", preposition, noun));
        }

        Ok(phrases)
    }
}

/// Render the surface text and component list for the given parts.
pub fn assemble(
    subject: String,
    verb: String,
    object: Option<String>,
    prepositional_phrases: Vec<String>,
) -> Sentence {
    let mut text = subject.clone();
    text.push(' ');
    if !UNMARKED_SUBJECTS.contains(&subject.as_str()) {
        text.push_str(PREDICATE_MARKER);
        text.push(' ');
    }
    text.push_str(&verb);

    if let Some(ref object) = object {
        text.push(' ');
        text.push_str(OBJECT_MARKER);
        text.push(' ');
        text.push_str(object);
    }

    for phrase in &prepositional_phrases {
        text.push(' ');
        text.push_str(phrase);
    }

    let mut components = Vec::with_capacity(3 + prepositional_phrases.len());
    components.push(subject.clone());
    components.push(verb.clone());
    components.extend(object.clone());
    components.extend(prepositional_phrases.iter().cloned());

    Sentence {
        text,
        subject,
        verb,
        object,
        prepositional_phrases,
        components,
    }
}
