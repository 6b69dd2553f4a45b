/// Lexicon and output data types shared by every stage of generation.

pub mod sentence;
pub mod word;
