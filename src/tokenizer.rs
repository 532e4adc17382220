//! Text splitting at the pipeline boundary
//!
//! Splits raw text into word and punctuation tokens with no linguistic
//! awareness: runs of letters/apostrophes stay together, every other
//! non-space character becomes its own token.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}']+|[^\s\p{L}']").expect("word pattern is valid"));

/// Split text into an ordered sequence of word/punctuation strings
///
/// Empty input yields an empty sequence. Joining the result with single
/// spaces preserves the multiset of non-space characters of the input.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_words_split_on_whitespace() {
        assert_eq!(tokenize("I see the king"), vec!["I", "see", "the", "king"]);
    }

    #[test]
    fn test_punctuation_is_separate_tokens() {
        assert_eq!(
            tokenize("friend, king!"),
            vec!["friend", ",", "king", "!"]
        );
    }

    #[test]
    fn test_apostrophes_stay_in_words() {
        assert_eq!(tokenize("don't go"), vec!["don't", "go"]);
    }

    #[test]
    fn test_accented_letters_stay_in_words() {
        // target-language text decodes too, so ë/í must not split words
        assert_eq!(tokenize("tári círa"), vec!["tári", "círa"]);
    }

    #[test]
    fn test_adjacent_punctuation_splits() {
        assert_eq!(tokenize("king..."), vec!["king", ".", ".", "."]);
    }

    #[test]
    fn test_non_space_content_is_preserved() {
        // Tokenization followed by re-joining keeps every non-space character
        let inputs = [
            "I see the king",
            "friend, king! (and queen)",
            "  spaced   out\ttext ",
            "don't... stop?!",
        ];
        for input in inputs {
            let rejoined = tokenize(input).join(" ");
            let mut expected: Vec<char> =
                input.chars().filter(|c| !c.is_whitespace()).collect();
            let mut actual: Vec<char> =
                rejoined.chars().filter(|c| !c.is_whitespace()).collect();
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected, "lost characters for input {:?}", input);
        }
    }
}
