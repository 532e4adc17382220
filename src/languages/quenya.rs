//! Quenya-inspired language module (non-canonical, stylized rules)
//!
//! SOV constituent order. Nouns take genitive/allative case suffixes and a
//! plural suffix; verbs inflect for present/past/future with person-number
//! agreement endings. The syntax mapper detects a single
//! subject/object/verb frame and reorders it.

use crate::languages::{Language, LanguageMeta, WordOrder, strip_one_suffix};
use crate::lexicon::{Lexicon, LexiconEntry};
use crate::token::{Case, Features, Number, PartOfSpeech, Person, Tense, Token, Wordform};

const META: LanguageMeta = LanguageMeta {
    name: "Quenya-inspired",
    key: "quenya",
    order: WordOrder::Sov,
};

#[rustfmt::skip]
const LEXICON_TABLE: &[(&str, PartOfSpeech, &str)] = &[
    ("friend",   PartOfSpeech::Noun, "meldo"),
    ("king",     PartOfSpeech::Noun, "aran"),
    ("queen",    PartOfSpeech::Noun, "tári"),
    ("light",    PartOfSpeech::Noun, "calë"),
    ("darkness", PartOfSpeech::Noun, "mórë"),
    ("water",    PartOfSpeech::Noun, "nen"),
    ("ring",     PartOfSpeech::Noun, "corma"),
    ("bring",    PartOfSpeech::Verb, "tulya"),
    ("bind",     PartOfSpeech::Verb, "notya"),
    ("see",      PartOfSpeech::Verb, "cenda"),
    ("love",     PartOfSpeech::Verb, "melë"),
    ("the",      PartOfSpeech::Det,  "i"),
    ("to",       PartOfSpeech::Adp,  "na"),
    ("of",       PartOfSpeech::Adp,  "o"),
    ("and",      PartOfSpeech::Conj, "ar"),
    ("i",        PartOfSpeech::Pron, "ni"),
    ("you",      PartOfSpeech::Pron, "le"),
];

/// Decode suffix strip list, longest checked first; only the first match
/// is removed
const DECODE_SUFFIXES: &[&str] = &["nna", "lmë", "lvë", "uva", "në", "o", "r"];

/// "corma" → "cormar", "calë" → "cali", "nen" → "neni"
fn noun_plural(stem: &str) -> String {
    if stem.ends_with('a') || stem.ends_with('o') {
        format!("{stem}r")
    } else if let Some(base) = stem.strip_suffix('ë') {
        format!("{base}i")
    } else {
        format!("{stem}i")
    }
}

/// "corma" → "cormo", "aran" → "arano"
fn noun_genitive(stem: &str) -> String {
    match stem.strip_suffix('a') {
        Some(base) => format!("{base}o"),
        None => format!("{stem}o"),
    }
}

/// to/towards: "aran" → "arannna"
fn noun_allative(stem: &str) -> String {
    format!("{stem}nna")
}

/// Stylized person-number agreement endings
fn agreement_suffix(person: Person, number: Number) -> &'static str {
    match (person, number) {
        (Person::First, Number::Sg) => "n",
        (Person::Second, Number::Sg) => "l",
        (Person::Third, Number::Sg) => "",
        (Person::First, Number::Pl) => "lmë",
        (Person::Second, Number::Pl) => "lvë",
        (Person::Third, Number::Pl) => "r",
    }
}

/// Present stem carries an `a` before the agreement ending
fn verb_present(stem: &str, person: Person, number: Number) -> String {
    let base = if stem.ends_with('a') {
        stem.to_string()
    } else {
        format!("{stem}a")
    };
    format!("{base}{}", agreement_suffix(person, number))
}

fn verb_past(stem: &str, person: Person, number: Number) -> String {
    format!("{stem}në{}", agreement_suffix(person, number))
}

fn verb_future(stem: &str, person: Person, number: Number) -> String {
    format!("{stem}uva{}", agreement_suffix(person, number))
}

/// Person/number read off the subject pronoun lemma; noun subjects keep
/// their defaults (third person, whatever number tagging assigned)
fn pronoun_agreement(tok: &mut Token) {
    match tok.lemma.as_str() {
        "i" => {
            tok.feats.person = Person::First;
            tok.feats.number = Number::Sg;
        }
        "you" => {
            tok.feats.person = Person::Second;
            tok.feats.number = Number::Sg;
        }
        _ => {}
    }
}

/// Quenya-inspired SOV module
pub struct Quenya {
    lexicon: Lexicon,
}

impl Quenya {
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

impl Default for Quenya {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Quenya {
    fn meta(&self) -> &LanguageMeta {
        &META
    }

    fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Single-pass S/O/V detection, first match wins for every role; later
    /// candidates of the same role are ignored. Misassigns roles on
    /// multi-noun or multi-verb sentences, which is the intended
    /// simplification.
    fn syntax_map(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        let mut subject = None;
        let mut verb = None;
        let mut object = None;
        for (i, tok) in tokens.iter().enumerate() {
            if subject.is_none()
                && matches!(tok.pos, PartOfSpeech::Pron | PartOfSpeech::Noun)
            {
                subject = Some(i);
            } else if object.is_none() && tok.pos == PartOfSpeech::Noun {
                object = Some(i);
            }
            if verb.is_none() && tok.pos == PartOfSpeech::Verb {
                verb = Some(i);
            }
        }

        if let Some(s) = subject {
            tokens[s].feats.case = Case::Nom;
            pronoun_agreement(&mut tokens[s]);
        }
        if let Some(o) = object {
            tokens[o].feats.case = Case::Acc;
        }

        // Reorder to [subject, object, verb, extras] only on a complete
        // frame; otherwise the order passes through unchanged.
        let (Some(s), Some(o), Some(v)) = (subject, object, verb) else {
            return tokens;
        };

        // Agreement rides on the verb during inflection
        tokens[v].feats.person = tokens[s].feats.person;
        tokens[v].feats.number = tokens[s].feats.number;

        let mut ordered = Vec::with_capacity(tokens.len());
        ordered.push(tokens[s].clone());
        ordered.push(tokens[o].clone());
        ordered.push(tokens[v].clone());
        for (i, tok) in tokens.into_iter().enumerate() {
            if i == s || i == o || i == v {
                continue;
            }
            // Case marking subsumes the article in a reordered frame
            if tok.pos == PartOfSpeech::Det {
                continue;
            }
            ordered.push(tok);
        }
        ordered
    }

    fn generate(&self, lemma: &str, pos: PartOfSpeech, feats: &Features) -> Wordform {
        match pos {
            PartOfSpeech::Noun => {
                // Case transformation happens before number transformation
                let mut stem = match feats.case {
                    Case::Gen => noun_genitive(lemma),
                    Case::All => noun_allative(lemma),
                    Case::Nom | Case::Acc => lemma.to_string(),
                };
                if feats.number == Number::Pl {
                    stem = noun_plural(&stem);
                }
                Wordform::new(stem, lemma, pos, feats.clone())
            }
            PartOfSpeech::Verb => {
                let form = match feats.tense {
                    Tense::Present => verb_present(lemma, feats.person, feats.number),
                    Tense::Past => verb_past(lemma, feats.person, feats.number),
                    Tense::Future => verb_future(lemma, feats.person, feats.number),
                };
                Wordform::new(form, lemma, pos, feats.clone())
            }
            PartOfSpeech::Pron | PartOfSpeech::Det | PartOfSpeech::Adp | PartOfSpeech::Conj => {
                Wordform::uninflected(lemma, pos, feats.clone())
            }
            _ => Wordform::uninflected(lemma, pos, feats.clone()),
        }
    }

    fn decode_surface(&self, surface: &str, pos: PartOfSpeech, feats: &Features) -> Wordform {
        let surface = surface.to_lowercase();
        // Bare lexicon forms decode without stripping
        if let Some(lemma_en) = self.lexicon.reverse_lookup(&surface) {
            return Wordform::uninflected(lemma_en, pos, feats.clone());
        }
        let stem = strip_one_suffix(&surface, DECODE_SUFFIXES);
        let lemma_en = self.lexicon.decode_lemma(&stem);
        Wordform::uninflected(lemma_en, pos, feats.clone())
    }
}
