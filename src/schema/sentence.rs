use serde::{Deserialize, Serialize};

/// A generated sentence together with its grammatical decomposition.
///
/// `components` lists the subject, the verb phrase, the object when present,
/// then each prepositional phrase, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub subject: String,
    pub verb: String,
    pub object: Option<String>,
    pub prepositional_phrases: Vec<String>,
    pub components: Vec<String>,
}

/// Role breakdown of a sentence, as reported in verbose output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRoles {
    pub subject: String,
    pub verb: String,
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prepositions: Vec<String>,
}

/// Verbose view of a sentence: surface text, components and roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerboseSentence {
    pub sentence: String,
    pub components: Vec<String>,
    pub roles: SentenceRoles,
}

impl Sentence {
    pub fn has_object(&self) -> bool {
        self.object.is_some()
    }

    pub fn verbose(&self) -> VerboseSentence {
        VerboseSentence {
            sentence: self.text.clone(),
            components: self.components.clone(),
            roles: SentenceRoles {
                subject: self.subject.clone(),
                verb: self.verb.clone(),
                object: self.object.clone(),
                prepositions: self.prepositional_phrases.clone(),
            },
        }
    }
}
