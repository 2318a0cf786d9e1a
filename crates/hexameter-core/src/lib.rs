//! Shared types for Greek hexameter scansion.
//!
//! - [`character`] -- Beta Code letter classes, diacritics, normalization
//! - [`enums`] -- vowel length, grammatical categories, ending classes, stem slots
//! - [`token`] -- `Line`, `Token`, `Parse` and the per-form `ParseTable`
//! - [`lexicon`] -- stems with per-vowel lengths and the lemma-keyed `Lexicon`

pub mod character;
pub mod enums;
pub mod lexicon;
pub mod token;

pub use enums::Length;
pub use lexicon::{Lexicon, LexiconEntry, LexiconError, Stem};
pub use token::{Line, Parse, ParseTable, Token};
