//! Linja Engine: probabilistic sentence generation for toki pona.
//!
//! Assembles sentences from a lexicon whose words are tagged with
//! grammatical roles, returning each sentence with its decomposition into
//! subject, verb, object and prepositional phrases. Batches are generated
//! concurrently over a read-only lexicon index.

pub mod core;
pub mod schema;
#[doc(hidden)]
pub mod test_utils;

pub use crate::core::engine::{Engine, EngineBuilder, EngineError};
pub use crate::schema::sentence::Sentence;
pub use crate::schema::word::{LexicalRole, Word};
