//! Sindarin-inspired language module (non-canonical, stylized rules)
//!
//! SVO order is kept; the interesting behavior is initial-consonant
//! lenition on nouns that immediately follow the determiner, detected by a
//! streaming left-to-right pass with one bit of carried state.

use crate::languages::{Language, LanguageMeta, WordOrder, strip_one_suffix};
use crate::lexicon::{Lexicon, LexiconEntry};
use crate::token::{Features, Number, PartOfSpeech, Person, Tense, Token, Wordform};

const META: LanguageMeta = LanguageMeta {
    name: "Sindarin-inspired",
    key: "sindarin",
    order: WordOrder::Svo,
};

#[rustfmt::skip]
const LEXICON_TABLE: &[(&str, PartOfSpeech, &str)] = &[
    ("friend",   PartOfSpeech::Noun, "mellon"),
    ("king",     PartOfSpeech::Noun, "aran"),
    ("light",    PartOfSpeech::Noun, "galad"),
    ("darkness", PartOfSpeech::Noun, "morn"),
    ("water",    PartOfSpeech::Noun, "nen"),
    ("ring",     PartOfSpeech::Noun, "ereg"),
    ("bring",    PartOfSpeech::Verb, "togo"),
    ("bind",     PartOfSpeech::Verb, "gorn"),
    ("see",      PartOfSpeech::Verb, "círa"),
    ("love",     PartOfSpeech::Verb, "meleth"),
    ("the",      PartOfSpeech::Det,  "i"),
    ("to",       PartOfSpeech::Adp,  "na"),
    ("of",       PartOfSpeech::Adp,  "o"),
    ("and",      PartOfSpeech::Conj, "a"),
    ("i",        PartOfSpeech::Pron, "im"),
    ("you",      PartOfSpeech::Pron, "le"),
];

/// Fixed surface form of the determiner
const DETERMINER: &str = "i";

/// Initial-consonant mutations triggered after the determiner
const LENITION: &[(&str, &str)] = &[
    ("p", "b"),
    ("t", "d"),
    ("c", "g"),
    ("m", "v"),
    ("s", "h"),
    ("h", ""),
    ("gw", "w"),
];

/// Reversals attempted while decoding, one mutation at most
const UNLENITE: &[(&str, &str)] = &[("b", "p"), ("d", "t"), ("g", "c"), ("v", "m")];

/// Decode suffix strip list, longest checked first
const DECODE_SUFFIXES: &[&str] = &["tha", "nt", "in", "ir", "a"];

/// "mellon" → "vellon", "galad" → "galad" (no rule for g)
fn apply_lenition(noun: &str) -> String {
    for (initial, mutated) in LENITION {
        if let Some(rest) = noun.strip_prefix(initial) {
            return format!("{mutated}{rest}");
        }
    }
    noun.to_string()
}

/// "mellon" → "mellin", "ereg" → "erig", "aran" → "aranin"
fn pluralize_noun(stem: &str) -> String {
    if let Some(base) = stem.strip_suffix("on") {
        format!("{base}in")
    } else if let Some(base) = stem.strip_suffix("eg") {
        format!("{base}ig")
    } else {
        format!("{stem}in")
    }
}

/// Bare stem in the third singular, agreement endings otherwise
fn verb_present(stem: &str, person: Person, number: Number) -> String {
    if person == Person::Third && number == Number::Sg {
        stem.to_string()
    } else if number == Number::Pl {
        format!("{stem}ir")
    } else {
        format!("{stem}a")
    }
}

fn verb_past(stem: &str) -> String {
    format!("{stem}nt")
}

fn verb_future(stem: &str) -> String {
    format!("{stem}tha")
}

/// Sindarin-inspired SVO module
pub struct Sindarin {
    lexicon: Lexicon,
}

impl Sindarin {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::from_table(LEXICON_TABLE),
        }
    }

    /// Module with overlay entries merged on top of the built-in table
    pub fn with_overlay(entries: Vec<LexiconEntry>) -> Self {
        let mut language = Self::new();
        language.lexicon.merge(entries);
        language
    }
}

impl Default for Sindarin {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Sindarin {
    fn meta(&self) -> &LanguageMeta {
        &META
    }

    fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Order-preserving pass: one bit of carried state tracks whether the
    /// previous token was a determiner, reset by anything that is neither
    /// a determiner nor a noun.
    fn syntax_map(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        let mut prev_det = false;
        for tok in &mut tokens {
            match tok.pos {
                PartOfSpeech::Det => {
                    tok.feats.det = true;
                    prev_det = true;
                }
                PartOfSpeech::Noun => {
                    tok.feats.lenite = prev_det;
                    prev_det = false;
                }
                PartOfSpeech::Verb => {
                    // TODO: derive Past from "-ed" surfaces instead of
                    // always keeping the Present default
                    prev_det = false;
                }
                _ => {
                    prev_det = false;
                }
            }
        }
        tokens
    }

    fn generate(&self, lemma: &str, pos: PartOfSpeech, feats: &Features) -> Wordform {
        match pos {
            PartOfSpeech::Noun => {
                // Mutation happens before number transformation
                let mut stem = if feats.lenite {
                    apply_lenition(lemma)
                } else {
                    lemma.to_string()
                };
                if feats.number == Number::Pl {
                    stem = pluralize_noun(&stem);
                }
                Wordform::new(stem, lemma, pos, feats.clone())
            }
            PartOfSpeech::Det => Wordform::new(DETERMINER, lemma, pos, feats.clone()),
            PartOfSpeech::Verb => {
                let form = match feats.tense {
                    Tense::Present => verb_present(lemma, feats.person, feats.number),
                    Tense::Past => verb_past(lemma),
                    Tense::Future => verb_future(lemma),
                };
                Wordform::new(form, lemma, pos, feats.clone())
            }
            PartOfSpeech::Pron | PartOfSpeech::Adp | PartOfSpeech::Conj => {
                Wordform::uninflected(lemma, pos, feats.clone())
            }
            _ => Wordform::uninflected(lemma, pos, feats.clone()),
        }
    }

    fn decode_surface(&self, surface: &str, pos: PartOfSpeech, feats: &Features) -> Wordform {
        let surface = surface.to_lowercase();
        // Bare lexicon forms decode without any undoing
        if let Some(lemma_en) = self.lexicon.reverse_lookup(&surface) {
            return Wordform::uninflected(lemma_en, pos, feats.clone());
        }
        // Reverse at most one initial mutation
        let mut stem = surface.clone();
        for (mutated, initial) in UNLENITE {
            if let Some(rest) = surface.strip_prefix(mutated) {
                stem = format!("{initial}{rest}");
                break;
            }
        }
        if stem != surface {
            if let Some(lemma_en) = self.lexicon.reverse_lookup(&stem) {
                return Wordform::uninflected(lemma_en, pos, feats.clone());
            }
        }
        let stripped = strip_one_suffix(&stem, DECODE_SUFFIXES);
        let lemma_en = self.lexicon.decode_lemma(&stripped);
        Wordform::uninflected(lemma_en, pos, feats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sindarin() -> Sindarin {
        Sindarin::new()
    }

    // ========== Lenition ==========

    #[test]
    fn test_lenition_rules() {
        assert_eq!(apply_lenition("perian"), "berian");
        assert_eq!(apply_lenition("tol"), "dol");
        assert_eq!(apply_lenition("calen"), "galen");
        assert_eq!(apply_lenition("mellon"), "vellon");
        assert_eq!(apply_lenition("sarn"), "harn");
        assert_eq!(apply_lenition("hith"), "ith");
        assert_eq!(apply_lenition("gwath"), "wath");
    }

    #[test]
    fn test_lenition_leaves_other_initials_alone() {
        assert_eq!(apply_lenition("aran"), "aran");
        assert_eq!(apply_lenition("nen"), "nen");
    }

    // ========== Plural ==========

    #[test]
    fn test_pluralize_endings() {
        assert_eq!(pluralize_noun("mellon"), "mellin");
        assert_eq!(pluralize_noun("ereg"), "erig");
        assert_eq!(pluralize_noun("aran"), "aranin");
    }

    // ========== Verbs ==========

    #[test]
    fn test_verb_present_agreement() {
        assert_eq!(verb_present("círa", Person::Third, Number::Sg), "círa");
        assert_eq!(verb_present("círa", Person::Third, Number::Pl), "círair");
        assert_eq!(verb_present("círa", Person::First, Number::Sg), "círaa");
    }

    #[test]
    fn test_verb_past_and_future_ignore_agreement() {
        assert_eq!(verb_past("togo"), "togont");
        assert_eq!(verb_future("togo"), "togotha");
    }

    // ========== Syntax mapping ==========

    #[test]
    fn test_order_is_preserved() {
        let tokens = vec![
            Token::new("I", "i", PartOfSpeech::Pron),
            Token::new("see", "see", PartOfSpeech::Verb),
            Token::new("the", "the", PartOfSpeech::Det),
            Token::new("king", "king", PartOfSpeech::Noun),
        ];
        let mapped = sindarin().syntax_map(tokens);
        let lemmas: Vec<&str> = mapped.iter().map(|t| t.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["i", "see", "the", "king"]);
    }

    #[test]
    fn test_noun_after_determiner_lenites() {
        let tokens = vec![
            Token::new("the", "the", PartOfSpeech::Det),
            Token::new("friend", "friend", PartOfSpeech::Noun),
            Token::new("friend", "friend", PartOfSpeech::Noun),
        ];
        let mapped = sindarin().syntax_map(tokens);
        assert!(mapped[0].feats.det);
        assert!(mapped[1].feats.lenite);
        // only the noun immediately after the determiner mutates
        assert!(!mapped[2].feats.lenite);
    }

    #[test]
    fn test_determiner_state_resets_on_other_tokens() {
        let tokens = vec![
            Token::new("the", "the", PartOfSpeech::Det),
            Token::new("and", "and", PartOfSpeech::Conj),
            Token::new("friend", "friend", PartOfSpeech::Noun),
        ];
        let mapped = sindarin().syntax_map(tokens);
        assert!(!mapped[2].feats.lenite);
    }

    // ========== Generation ==========

    #[test]
    fn test_generate_lenited_plural_noun() {
        let feats = Features {
            lenite: true,
            number: Number::Pl,
            ..Features::default()
        };
        // mutation first ("vellon"), then plural ("vellin")
        let wf = sindarin().generate("mellon", PartOfSpeech::Noun, &feats);
        assert_eq!(wf.surface, "vellin");
    }

    #[test]
    fn test_determiner_has_fixed_surface() {
        let wf = sindarin().generate("the", PartOfSpeech::Det, &Features::default());
        assert_eq!(wf.surface, "i");
    }

    // ========== Decoding ==========

    #[test]
    fn test_decode_bare_lexicon_form() {
        let wf = sindarin().decode_surface("mellon", PartOfSpeech::Noun, &Features::default());
        assert_eq!(wf.surface, "friend");
    }

    #[test]
    fn test_decode_reverses_one_lenition() {
        let wf = sindarin().decode_surface("vellon", PartOfSpeech::Noun, &Features::default());
        assert_eq!(wf.surface, "friend");
    }

    #[test]
    fn test_decode_strips_one_suffix() {
        let language = sindarin();
        let wf = language.decode_surface("eregtha", PartOfSpeech::Verb, &Features::default());
        assert_eq!(wf.surface, "ring");
        let wf = language.decode_surface("togont", PartOfSpeech::Verb, &Features::default());
        assert_eq!(wf.surface, "bring");
    }

    #[test]
    fn test_decode_unknown_stem_is_best_effort() {
        let wf = sindarin().decode_surface("zirakin", PartOfSpeech::Noun, &Features::default());
        assert_eq!(wf.surface, "zirak");
    }
}
