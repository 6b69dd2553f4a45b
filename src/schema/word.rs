use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical category a word can fill in a generated sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LexicalRole {
    Particle,
    Content,
    Preverb,
    Preposition,
    Pronoun,
}

impl LexicalRole {
    /// Every role, in declaration order.
    pub const ALL: [LexicalRole; 5] = [
        Self::Particle,
        Self::Content,
        Self::Preverb,
        Self::Preposition,
        Self::Pronoun,
    ];

    /// Roles the generator draws from. Each must hold at least one word.
    pub const REQUIRED: [LexicalRole; 4] = [
        Self::Content,
        Self::Preverb,
        Self::Preposition,
        Self::Pronoun,
    ];

    /// Lowercase name used when reporting the lexicon.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Particle => "particle",
            Self::Content => "content",
            Self::Preverb => "preverb",
            Self::Preposition => "preposition",
            Self::Pronoun => "pronoun",
        }
    }

    /// Inverse of [`LexicalRole::name`].
    pub fn from_name(name: &str) -> Option<LexicalRole> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }

    /// Classify a single dictionary definition by its leading part-of-speech tag.
    ///
    /// `(particle)` and `(interjection)` map to `Particle`, `(preverb)` and
    /// `(preposition)` to their roles. Any other definition describes an
    /// open-class meaning and maps to `Content`.
    pub fn classify_definition(definition: &str) -> LexicalRole {
        let definition = definition.trim_start();
        if definition.starts_with("(particle)") || definition.starts_with("(interjection)") {
            Self::Particle
        } else if definition.starts_with("(preverb)") {
            Self::Preverb
        } else if definition.starts_with("(preposition)") {
            Self::Preposition
        } else {
            Self::Content
        }
    }
}

impl fmt::Display for LexicalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexicon entry tagged with the roles it may fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub roles: FxHashSet<LexicalRole>,
}

impl Word {
    /// Build a word from any collection of roles. Repeated roles collapse.
    pub fn new(text: impl Into<String>, roles: impl IntoIterator<Item = LexicalRole>) -> Self {
        Self {
            text: text.into(),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn has_role(&self, role: LexicalRole) -> bool {
        self.roles.contains(&role)
    }

    /// Roles in a stable order, for display.
    pub fn sorted_roles(&self) -> Vec<LexicalRole> {
        let mut roles: Vec<LexicalRole> = self.roles.iter().copied().collect();
        roles.sort();
        roles
    }
}
