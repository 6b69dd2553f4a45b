/// Generation engine: lexicon indexing, random selection, phrase building,
/// sentence composition and concurrent batching.

pub mod batch;
pub mod composer;
pub mod dictionary;
pub mod engine;
pub mod lexicon;
pub mod phrase;
pub mod random;
