//! Bidirectional lexicon tables
//!
//! Each language module owns one [`Lexicon`]: a forward map keyed by the
//! lowercased English lemma and a reverse map derived from it by inversion.
//! Tables are built once at startup and read-only for the lifetime of a
//! translation run.
//!
//! User-supplied overlay entries can be merged from a JSON file before a
//! language is handed to the engine:
//!
//! ```json
//! {
//!     "@metadata": { "authors": ["..."] },
//!     "river": { "pos": "NOUN", "lemma": "sírë", "gloss": "river" },
//!     "sing": { "pos": "VERB", "lemma": "linda" }
//! }
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::token::PartOfSpeech;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One bidirectional lexicon fact: English lemma ↔ target-language lemma
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub lemma_en: String,
    pub pos: PartOfSpeech,
    pub lemma_lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

/// Forward (English → target) lexicon with its derived reverse map
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    forward: HashMap<String, LexiconEntry>,
    reverse: HashMap<String, String>,
}

impl Lexicon {
    /// Build a lexicon from a static `(english, pos, target)` table
    pub fn from_table(table: &[(&str, PartOfSpeech, &str)]) -> Self {
        let mut lexicon = Lexicon::default();
        for &(lemma_en, pos, lemma_lang) in table {
            lexicon.insert(LexiconEntry {
                lemma_en: lemma_en.to_string(),
                pos,
                lemma_lang: lemma_lang.to_string(),
                gloss: None,
            });
        }
        lexicon
    }

    /// Insert one entry, keeping the reverse map in sync
    ///
    /// The forward key is the lowercased English lemma; a repeated English
    /// lemma replaces the earlier entry.
    pub fn insert(&mut self, entry: LexiconEntry) {
        self.reverse
            .insert(entry.lemma_lang.clone(), entry.lemma_en.clone());
        self.forward.insert(entry.lemma_en.to_lowercase(), entry);
    }

    /// Merge overlay entries on top of the built-in table
    pub fn merge(&mut self, entries: Vec<LexiconEntry>) {
        for entry in entries {
            self.insert(entry);
        }
    }

    /// Look up a source-language word (lowercased before lookup)
    pub fn lookup_source(&self, word: &str) -> Option<&LexiconEntry> {
        self.forward.get(&word.to_lowercase())
    }

    /// Target-language lemma for an English lemma, if present
    pub fn forward_lookup(&self, lemma_en: &str) -> Option<&str> {
        self.forward
            .get(&lemma_en.to_lowercase())
            .map(|entry| entry.lemma_lang.as_str())
    }

    /// English lemma for a target-language lemma, if present
    pub fn reverse_lookup(&self, lemma_lang: &str) -> Option<&str> {
        self.reverse.get(lemma_lang).map(|s| s.as_str())
    }

    /// English lemma → target lemma; untranslatable lemmas pass through
    pub fn encode_lemma(&self, lemma: &str) -> String {
        self.forward_lookup(lemma)
            .map(|s| s.to_string())
            .unwrap_or_else(|| lemma.to_string())
    }

    /// Target lemma → English lemma; untranslatable lemmas pass through
    pub fn decode_lemma(&self, lemma: &str) -> String {
        self.reverse_lookup(lemma)
            .map(|s| s.to_string())
            .unwrap_or_else(|| lemma.to_string())
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Shape of one overlay entry value in the JSON file
#[derive(Debug, Deserialize)]
struct OverlayEntry {
    pos: PartOfSpeech,
    lemma: String,
    #[serde(default)]
    gloss: Option<String>,
}

/// Load lexicon overlay entries from a JSON file
///
/// The file must be a JSON object mapping English words to entry objects.
/// Keys starting with `@` are metadata and skipped. Malformed entries are
/// warned about on stderr and skipped rather than failing the whole load.
///
/// # Errors
/// - File not found or unreadable
/// - Content is not a JSON object
pub fn load_overlay_from_file(path: &Path) -> TranslateResult<Vec<LexiconEntry>> {
    let content = fs::read_to_string(path).map_err(|e| {
        TranslateError::LexiconLoad(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    let json: Value = serde_json::from_str(&content).map_err(|e| {
        TranslateError::LexiconLoad(format!(
            "Failed to parse JSON from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let obj = json.as_object().ok_or_else(|| {
        TranslateError::LexiconLoad(format!(
            "Invalid JSON in '{}': root must be an object",
            path.display()
        ))
    })?;

    let mut entries = Vec::new();
    for (key, value) in obj {
        // Skip metadata
        if key.starts_with('@') {
            continue;
        }

        match serde_json::from_value::<OverlayEntry>(value.clone()) {
            Ok(overlay) => entries.push(LexiconEntry {
                lemma_en: key.clone(),
                pos: overlay.pos,
                lemma_lang: overlay.lemma,
                gloss: overlay.gloss,
            }),
            Err(e) => {
                eprintln!("Warning: lexicon entry '{}' is malformed ({}), skipping", key, e);
            }
        }
    }

    Ok(entries)
}
