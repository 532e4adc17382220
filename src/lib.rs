//! Rule-based translation between English and constructed languages
//!
//! Text flows through five stages: part-of-speech tagging, syntactic
//! mapping, lemma translation, morphological generation, and assembly.
//! Everything target-specific (the lexicon, the word order, the
//! agreement and mutation rules) lives in a per-language module behind
//! the [`Language`] trait; the pipeline itself never changes when a
//! language is added.
//!
//! # Example
//!
//! ```
//! use eldarin::{Direction, TranslatorEngine};
//!
//! let engine = TranslatorEngine::for_key("quenya").unwrap();
//! assert_eq!(
//!     engine.translate("I see the king", Direction::Encode),
//!     "Ni aran cendan"
//! );
//! assert_eq!(engine.translate("meldo", Direction::Decode), "Friend");
//! ```

pub mod engine;
pub mod error;
pub mod languages;
pub mod lexicon;
pub mod token;
pub mod tokenizer;


// Re-export the main types for convenient access
pub use engine::{Direction, TranslatorEngine};
pub use error::{TranslateError, TranslateResult};
pub use languages::{Language, LanguageMeta, WordOrder};
pub use lexicon::{Lexicon, LexiconEntry, load_overlay_from_file};
pub use token::{Case, Features, Number, PartOfSpeech, Person, Tense, Token, Wordform};
pub use tokenizer::tokenize;
