//! Target-language modules
//!
//! Each constructed language plugs into the pipeline through the
//! [`Language`] trait: a lexicon, a syntax mapper, morphology rules, and
//! assembly. The orchestrator is language-agnostic over this contract, so a
//! new language is added by implementing the trait and registering it here;
//! the engine never changes.
//!
//! Shipped modules:
//!
//! 1. **Quenya-inspired** (`quenya`) - SOV order, noun case suffixes,
//!    verb person/number agreement
//! 2. **Sindarin-inspired** (`sindarin`) - SVO order, initial-consonant
//!    lenition after the determiner
//!
//! Module instances live in process-wide lazily-initialized statics and are
//! never mutated after construction, so they are freely shared across
//! threads.

pub mod quenya;
pub mod sindarin;

pub use quenya::Quenya;
pub use sindarin::Sindarin;

use crate::engine::Direction;
use crate::error::{TranslateError, TranslateResult};
use crate::lexicon::{Lexicon, LexiconEntry};
use crate::token::{Features, PartOfSpeech, Token, Wordform};
use once_cell::sync::Lazy;
use std::fmt;

/// Base constituent-order typology of a target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrder {
    Sov,
    Svo,
}

impl fmt::Display for WordOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordOrder::Sov => write!(f, "SOV"),
            WordOrder::Svo => write!(f, "SVO"),
        }
    }
}

/// Static metadata describing a language module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMeta {
    /// Human-readable display name
    pub name: &'static str,
    /// Short key used on the command line and in the registry
    pub key: &'static str,
    pub order: WordOrder,
}

/// Contract every target language implements to plug into the orchestrator
///
/// The provided methods cover the behavior shared by all languages (lexicon
/// lookups with pass-through, direction dispatch, assembly); implementors
/// supply metadata, the lexicon, the syntax mapper, and the morphology
/// rules.
pub trait Language: Send + Sync {
    fn meta(&self) -> &LanguageMeta;

    fn lexicon(&self) -> &Lexicon;

    /// Reorder a tagged token sequence into target-language structure and
    /// attach the grammatical features morphology will consume
    fn syntax_map(&self, tokens: Vec<Token>) -> Vec<Token>;

    /// Inflect a lemma into a surface form (encode direction)
    fn generate(&self, lemma: &str, pos: PartOfSpeech, feats: &Features) -> Wordform;

    /// Guess the English lemma behind a target-language surface form
    /// (decode direction)
    fn decode_surface(&self, surface: &str, pos: PartOfSpeech, feats: &Features) -> Wordform;

    /// Map a lemma across the lexicon in the given direction
    ///
    /// Lemmas absent from the table pass through verbatim, so proper nouns
    /// and loanwords survive translation.
    fn translate_lemma(&self, lemma: &str, _pos: PartOfSpeech, direction: Direction) -> String {
        match direction {
            Direction::Encode => self.lexicon().encode_lemma(lemma),
            Direction::Decode => self.lexicon().decode_lemma(lemma),
        }
    }

    /// Direction dispatch over [`generate`]/[`decode_surface`]
    ///
    /// `form` is the translated lemma when encoding and the original
    /// surface text when decoding.
    ///
    /// [`generate`]: Language::generate
    /// [`decode_surface`]: Language::decode_surface
    fn inflect(
        &self,
        form: &str,
        pos: PartOfSpeech,
        feats: &Features,
        direction: Direction,
    ) -> Wordform {
        match direction {
            Direction::Encode => self.generate(form, pos, feats),
            Direction::Decode => self.decode_surface(form, pos, feats),
        }
    }

    /// Join wordform surfaces with single spaces and capitalize the first
    /// character of the sentence
    fn assemble(&self, wordforms: &[Wordform]) -> String {
        let joined = wordforms
            .iter()
            .map(|wf| wf.surface.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        capitalize_first(&joined)
    }
}

/// Uppercase exactly the first character of a string
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Strip the first matching suffix from a fixed priority list
///
/// A single-strip heuristic, not full morphological analysis: only the
/// first suffix that matches (lists are ordered longest first) is removed.
pub(crate) fn strip_one_suffix(surface: &str, suffixes: &[&str]) -> String {
    for suffix in suffixes {
        if let Some(stem) = surface.strip_suffix(suffix) {
            return stem.to_string();
        }
    }
    surface.to_string()
}

static QUENYA: Lazy<Quenya> = Lazy::new(Quenya::new);
static SINDARIN: Lazy<Sindarin> = Lazy::new(Sindarin::new);

/// Look up a registered language module by its short key
pub fn get(key: &str) -> Option<&'static dyn Language> {
    match key {
        "quenya" => Some(&*QUENYA),
        "sindarin" => Some(&*SINDARIN),
        _ => None,
    }
}

/// All registered language modules, in registration order
pub fn available() -> Vec<&'static dyn Language> {
    vec![&*QUENYA, &*SINDARIN]
}

/// Build a language module with overlay entries merged into its lexicon
///
/// Used by the CLI for user-supplied lexicon files; the built-in statics
/// stay untouched.
pub fn create_with_overlay(
    key: &str,
    entries: Vec<LexiconEntry>,
) -> TranslateResult<Box<dyn Language>> {
    match key {
        "quenya" => Ok(Box::new(Quenya::with_overlay(entries))),
        "sindarin" => Ok(Box::new(Sindarin::with_overlay(entries))),
        _ => Err(TranslateError::UnknownLanguage(key.to_string())),
    }
}
