/// Noun and verb phrase generation.

use crate::core::lexicon::LexiconIndex;
use crate::core::random::{chance, pick, GenerationError, Odds, RandomSource};
use crate::schema::word::LexicalRole;

/// The negation particle.
pub const NEGATION_PARTICLE: &str = "ala";

/// A noun phrase is a pronoun.
pub const PRONOUN_ODDS: Odds = (1, 3);
/// A content noun grows a second content word.
pub const COMPOUND_ODDS: Odds = (1, 2);
/// The verb takes a preverb.
pub const PREVERB_ODDS: Odds = (1, 3);
/// A preverb is negated.
pub const PREVERB_NEGATION_ODDS: Odds = (1, 4);
/// A verb without preverb negation takes a trailing negation.
pub const TRAILING_NEGATION_ODDS: Odds = (1, 4);

/// Where, if anywhere, a verb phrase carries its negation marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Negation {
    None,
    /// `<preverb> ala <verb>`
    Preverb,
    /// `<verb> ala`
    Trailing,
}

/// A generated verb phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbPhrase {
    pub text: String,
    pub preverb: Option<String>,
    pub negation: Negation,
}

/// Builds noun and verb phrases from the lexicon.
#[derive(Debug, Clone, Copy)]
pub struct PhraseGenerator<'a> {
    index: &'a LexiconIndex,
}

impl<'a> PhraseGenerator<'a> {
    pub fn new(index: &'a LexiconIndex) -> Self {
        Self { index }
    }

    /// A pronoun, a content word, or a two-content-word compound.
    pub fn noun<R>(&self, rng: &mut R) -> Result<String, GenerationError>
    where
        R: RandomSource + ?Sized,
    {
        if chance(rng, PRONOUN_ODDS) {
            return Ok(pick(rng, self.index.words(LexicalRole::Pronoun))?.clone());
        }

        let content = self.index.words(LexicalRole::Content);
        let mut noun = pick(rng, content)?.clone();
        if chance(rng, COMPOUND_ODDS) {
            noun.push(' ');
            noun.push_str(pick(rng, content)?);
        }
        Ok(noun)
    }

    /// A content verb, optionally led by a preverb, with at most one
    /// negation marker.
    pub fn verb<R>(&self, rng: &mut R) -> Result<VerbPhrase, GenerationError>
    where
        R: RandomSource + ?Sized,
    {
        let root = pick(rng, self.index.words(LexicalRole::Content))?;
        let mut negation = Negation::None;
        let mut preverb = None;

        let mut text = if chance(rng, PREVERB_ODDS) {
            let mut modal = pick(rng, self.index.words(LexicalRole::Preverb))?.clone();
            if chance(rng, PREVERB_NEGATION_ODDS) {
                modal.push(' ');
                modal.push_str(NEGATION_PARTICLE);
                negation = Negation::Preverb;
            }
            let text = format!("{} {}", modal, root);
            preverb = Some(modal);
            text
        } else {
            root.clone()
        };

        if negation == Negation::None && chance(rng, TRAILING_NEGATION_ODDS) {
            text.push(' ');
            text.push_str(NEGATION_PARTICLE);
            negation = Negation::Trailing;
        }

        Ok(VerbPhrase {
            text,
            preverb,
            negation,
        })
    }
}
