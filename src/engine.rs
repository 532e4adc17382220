//! Pipeline orchestrator
//!
//! Sequences the five translation stages (tagging, syntax mapping, lemma
//! translation, morphological generation, assembly) over one language
//! module, parameterized by direction. The engine is language-agnostic:
//! everything target-specific lives behind the [`Language`] trait.
//!
//! Each [`translate`] call is a pure function of (text, direction, language)
//! against read-only tables, so engines can be used from any number of
//! threads without locking.
//!
//! [`translate`]: TranslatorEngine::translate

use crate::error::{TranslateError, TranslateResult};
use crate::languages::{self, Language};
use crate::token::{Number, PartOfSpeech, Token, Wordform};
use crate::tokenizer::tokenize;
use std::fmt;
use std::str::FromStr;

/// Translation direction, threaded unchanged through lemma translation and
/// morphology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// English → target language
    Encode,
    /// Target language → English
    Decode,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Direction::Encode),
            "decode" => Ok(Direction::Decode),
            other => Err(TranslateError::InvalidDirection(other.to_string())),
        }
    }
}

/// Suffix fallback when a word is missing from the lexicon
fn guess_pos(word: &str) -> PartOfSpeech {
    // Punctuation and other non-letter tokens ride through untouched
    if !word.chars().any(|c| c.is_alphabetic()) {
        return PartOfSpeech::Other;
    }
    if word.ends_with("ing") || word.ends_with("ed") {
        return PartOfSpeech::Verb;
    }
    if word.ends_with("ly") {
        return PartOfSpeech::Adv;
    }
    PartOfSpeech::Noun
}

/// The translation pipeline over one language module
pub struct TranslatorEngine<'a> {
    language: &'a dyn Language,
}

impl<'a> std::fmt::Debug for TranslatorEngine<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorEngine")
            .field("language", &self.language.meta().key)
            .finish()
    }
}

impl TranslatorEngine<'static> {
    /// Engine over a registered language, looked up by key
    pub fn for_key(key: &str) -> TranslateResult<Self> {
        let language = languages::get(key)
            .ok_or_else(|| TranslateError::UnknownLanguage(key.to_string()))?;
        Ok(Self::new(language))
    }
}

impl<'a> TranslatorEngine<'a> {
    pub fn new(language: &'a dyn Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> &dyn Language {
        self.language
    }

    /// Assign a lemma and part-of-speech to every word
    ///
    /// Lexicon hits take the entry's lemma and tag; misses first retry an
    /// `s`-final word without the `s` (a plural noun surface), then fall
    /// back to the lowercased text with a suffix-heuristic tag. Total:
    /// every word comes back tagged.
    pub fn pos_tag(&self, words: &[String]) -> Vec<Token> {
        words.iter().map(|word| self.tag_word(word)).collect()
    }

    fn tag_word(&self, word: &str) -> Token {
        let lexicon = self.language.lexicon();
        let lower = word.to_lowercase();
        if let Some(entry) = lexicon.lookup_source(&lower) {
            return Token::new(word, &entry.lemma_en, entry.pos);
        }
        // Plural noun surface: "kings" → "king" + PL
        if lower.ends_with('s') && lower.len() > 3 {
            if let Some(entry) = lexicon.lookup_source(&lower[..lower.len() - 1]) {
                if entry.pos == PartOfSpeech::Noun {
                    let mut tok = Token::new(word, &entry.lemma_en, entry.pos);
                    tok.feats.number = Number::Pl;
                    return tok;
                }
            }
        }
        Token::new(word, lower, guess_pos(word))
    }

    /// Map every token's lemma across the lexicon, producing new tokens
    ///
    /// The input sequence is not mutated; features and part-of-speech are
    /// copied through unchanged, and the language code follows the
    /// direction.
    pub fn translate_lemmas(&self, tokens: &[Token], direction: Direction) -> Vec<Token> {
        tokens
            .iter()
            .map(|tok| {
                let mut mapped = tok.clone();
                mapped.lemma = self
                    .language
                    .translate_lemma(&tok.lemma, tok.pos, direction);
                mapped.lang = match direction {
                    Direction::Encode => self.language.meta().key.to_string(),
                    Direction::Decode => "en".to_string(),
                };
                mapped
            })
            .collect()
    }

    /// Inflect every token into its final wordform
    ///
    /// Encoding inflects the translated lemma; decoding decomposes the
    /// original surface text.
    pub fn morph_generate(&self, tokens: &[Token], direction: Direction) -> Vec<Wordform> {
        tokens
            .iter()
            .map(|tok| {
                let form = match direction {
                    Direction::Encode => tok.lemma.as_str(),
                    Direction::Decode => tok.text.as_str(),
                };
                self.language.inflect(form, tok.pos, &tok.feats, direction)
            })
            .collect()
    }

    /// Run the full pipeline: tag → map → translate lemmas → inflect →
    /// assemble
    pub fn translate(&self, text: &str, direction: Direction) -> String {
        let words = tokenize(text);
        let tokens = self.pos_tag(&words);
        let tokens = self.language.syntax_map(tokens);
        let tokens = self.translate_lemmas(&tokens, direction);
        let wordforms = self.morph_generate(&tokens, direction);
        self.language.assemble(&wordforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quenya_engine() -> TranslatorEngine<'static> {
        TranslatorEngine::for_key("quenya").unwrap()
    }

    // ========== Direction parsing ==========

    #[test]
    fn test_direction_from_str() {
        assert_eq!("encode".parse::<Direction>().unwrap(), Direction::Encode);
        assert_eq!("decode".parse::<Direction>().unwrap(), Direction::Decode);
    }

    #[test]
    fn test_direction_rejects_unknown() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err, TranslateError::InvalidDirection("sideways".to_string()));
    }

    #[test]
    fn test_direction_round_trips_through_display() {
        for direction in [Direction::Encode, Direction::Decode] {
            assert_eq!(
                direction.to_string().parse::<Direction>().unwrap(),
                direction
            );
        }
    }

    // ========== Engine construction ==========

    #[test]
    fn test_for_key_unknown_language() {
        let err = TranslatorEngine::for_key("valarin").unwrap_err();
        assert_eq!(err, TranslateError::UnknownLanguage("valarin".to_string()));
    }

    // ========== Tagging ==========

    #[test]
    fn test_tagging_is_total() {
        let engine = quenya_engine();
        let words: Vec<String> = ["I", "quickly", "vanished", "beyond", ",", "Mordor"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tokens = engine.pos_tag(&words);
        assert_eq!(tokens.len(), words.len());
        for tok in &tokens {
            assert!(!tok.lemma.is_empty(), "untagged token {:?}", tok.text);
        }
    }

    #[test]
    fn test_tagging_lexicon_hit() {
        let engine = quenya_engine();
        let tokens = engine.pos_tag(&["King".to_string()]);
        assert_eq!(tokens[0].lemma, "king");
        assert_eq!(tokens[0].pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_tagging_uppercase_i_is_pronoun() {
        let engine = quenya_engine();
        let tokens = engine.pos_tag(&["I".to_string()]);
        assert_eq!(tokens[0].pos, PartOfSpeech::Pron);
        assert_eq!(tokens[0].lemma, "i");
    }

    #[test]
    fn test_tagging_suffix_heuristics() {
        let engine = quenya_engine();
        let words: Vec<String> = ["running", "walked", "slowly", "mithril"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tokens = engine.pos_tag(&words);
        assert_eq!(tokens[0].pos, PartOfSpeech::Verb);
        assert_eq!(tokens[1].pos, PartOfSpeech::Verb);
        assert_eq!(tokens[2].pos, PartOfSpeech::Adv);
        assert_eq!(tokens[3].pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_tagging_punctuation_is_other() {
        let engine = quenya_engine();
        let tokens = engine.pos_tag(&[".".to_string(), "!".to_string()]);
        assert_eq!(tokens[0].pos, PartOfSpeech::Other);
        assert_eq!(tokens[1].pos, PartOfSpeech::Other);
    }

    #[test]
    fn test_tagging_plural_surface_of_known_noun() {
        let engine = quenya_engine();
        let tokens = engine.pos_tag(&["kings".to_string()]);
        assert_eq!(tokens[0].lemma, "king");
        assert_eq!(tokens[0].pos, PartOfSpeech::Noun);
        assert_eq!(tokens[0].feats.number, Number::Pl);
    }

    #[test]
    fn test_tagging_short_s_word_is_not_plural_stripped() {
        // "as" is too short for the plural retry
        let engine = quenya_engine();
        let tokens = engine.pos_tag(&["as".to_string()]);
        assert_eq!(tokens[0].lemma, "as");
        assert_eq!(tokens[0].feats.number, Number::Sg);
    }

    // ========== Lemma translation ==========

    #[test]
    fn test_translate_lemmas_does_not_mutate_input() {
        let engine = quenya_engine();
        let tokens = engine.pos_tag(&["friend".to_string()]);
        let before = tokens.clone();
        let mapped = engine.translate_lemmas(&tokens, Direction::Encode);
        assert_eq!(tokens, before);
        assert_eq!(mapped[0].lemma, "meldo");
        assert_eq!(mapped[0].lang, "quenya");
        assert_eq!(mapped[0].pos, tokens[0].pos);
    }

    #[test]
    fn test_translate_lemmas_pass_through_on_miss() {
        let engine = quenya_engine();
        let tokens = engine.pos_tag(&["Mordor".to_string()]);
        let mapped = engine.translate_lemmas(&tokens, Direction::Encode);
        assert_eq!(mapped[0].lemma, "mordor");
    }

    #[test]
    fn test_translate_lemmas_decode_direction() {
        let engine = quenya_engine();
        let mut tok = Token::new("meldo", "meldo", PartOfSpeech::Noun);
        tok.lang = "quenya".to_string();
        let mapped = engine.translate_lemmas(&[tok], Direction::Decode);
        assert_eq!(mapped[0].lemma, "friend");
        assert_eq!(mapped[0].lang, "en");
    }
}
