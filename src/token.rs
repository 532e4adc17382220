//! Core data structures for the translation pipeline
//!
//! This module defines the fundamental data types carried between pipeline
//! stages: part-of-speech tags, grammatical feature records, tagged tokens,
//! and inflected wordforms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Part-of-speech tags assigned during tagging
///
/// A closed set: anything the tagger cannot classify lands in [`Other`],
/// which also carries punctuation through the pipeline untouched.
///
/// [`Other`]: PartOfSpeech::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adv,
    Pron,
    Det,
    Adp,
    Conj,
    /// Punctuation and unclassifiable tokens
    Other,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Conj => "CONJ",
            PartOfSpeech::Other => "OTHER",
        };
        write!(f, "{}", name)
    }
}

/// Grammatical case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Case {
    #[default]
    Nom,
    Acc,
    Gen,
    All,
}

/// Grammatical number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Number {
    #[default]
    Sg,
    Pl,
}

/// Grammatical person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Person {
    First,
    Second,
    #[default]
    Third,
}

/// Verb tense
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tense {
    #[default]
    Present,
    Past,
    Future,
}

/// Grammatical features attached to a token by the syntax mapper
///
/// Every field has a fixed default (NOM, SG, third person, present tense,
/// no mutation flags), so a freshly tagged token already carries the
/// "empty" feature record and morphology rules never need a runtime
/// fallback for a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    pub case: Case,
    pub number: Number,
    pub person: Person,
    pub tense: Tense,
    /// Initial-consonant mutation requested (lenition languages only)
    pub lenite: bool,
    /// Token is a determiner rendered as a fixed per-language form
    pub det: bool,
}

/// One source-language unit moving through the pipeline
///
/// Tokens are only constructed by the tagging stage, so lemma and
/// part-of-speech are always populated. The syntax mapper enriches the
/// feature record in place; lemma translation produces new tokens and
/// leaves its input untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface text as it appeared in the input (never modified)
    pub text: String,
    /// Dictionary form assigned by the tagger, rewritten by lemma translation
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub feats: Features,
    /// Language code of the current lemma ("en" until lemma translation)
    pub lang: String,
}

impl Token {
    /// Create a tagged token with default features
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            feats: Features::default(),
            lang: "en".to_string(),
        }
    }
}

/// The final inflected unit ready for assembly
///
/// Created once per token by the morphology stage and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Wordform {
    /// Inflected output form
    pub surface: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// Features carried through unchanged from the token that produced this
    pub feats: Features,
}

impl Wordform {
    pub fn new(
        surface: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        feats: Features,
    ) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            pos,
            feats,
        }
    }

    /// Wordform whose surface is the lemma itself (closed-class words)
    pub fn uninflected(lemma: impl Into<String>, pos: PartOfSpeech, feats: Features) -> Self {
        let lemma = lemma.into();
        Self {
            surface: lemma.clone(),
            lemma,
            pos,
            feats,
        }
    }
}
