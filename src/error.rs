/// Error types for the translation boundary
///
/// The pipeline itself is total: lexicon misses and absent features fall
/// back to defined defaults and never surface as errors. The only fallible
/// operations are boundary validation (language key, direction) and lexicon
/// overlay loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Language key does not match any registered module
    UnknownLanguage(String),
    /// Direction is neither "encode" nor "decode"
    InvalidDirection(String),
    /// A lexicon overlay file could not be read or parsed
    LexiconLoad(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::UnknownLanguage(key) => write!(f, "Unknown language: {}", key),
            TranslateError::InvalidDirection(dir) => {
                write!(f, "Invalid direction '{}', expected 'encode' or 'decode'", dir)
            }
            TranslateError::LexiconLoad(msg) => write!(f, "Lexicon load error: {}", msg),
        }
    }
}

impl std::error::Error for TranslateError {}

/// Result type for translation boundary operations
pub type TranslateResult<T> = Result<T, TranslateError>;
