//! Localized message tables with language fallback.
//!
//! A table file is a JSON object keyed by language code; each value maps
//! message keys to display strings. A default table ships inside the
//! crate so the application runs without any external file. Lookups for
//! a language that is not present fall back to English; lookups for a
//! key that is not present echo the key, which keeps a missing string
//! visible without ever panicking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

/// Language used when a requested language is not in the table.
pub const FALLBACK_LANGUAGE: &str = "en";

const BUILTIN_TABLES: &str = include_str!("languages.json");

type Tables = HashMap<String, HashMap<String, String>>;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read language file: {0}")]
    Io(#[from] std::io::Error),

    #[error("language file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("language table does not define the fallback language \"en\"")]
    MissingFallback,
}

/// Key-to-string lookup for one active language.
///
/// Passed by value into whatever renders text; not global state.
#[derive(Debug, Clone)]
pub struct Translator {
    tables: Tables,
    language: String,
}

impl Translator {
    /// Translator over the built-in tables.
    pub fn new(language: &str) -> Self {
        // The built-in table is compiled into the crate and covered by
        // tests, so parsing it cannot fail at runtime.
        let tables: Tables =
            serde_json::from_str(BUILTIN_TABLES).expect("built-in language table is valid JSON");
        let language = resolve(&tables, language);
        Translator { tables, language }
    }

    /// Translator over an external table file.
    pub fn from_path(path: impl AsRef<Path>, language: &str) -> Result<Self, I18nError> {
        let data = fs::read_to_string(path.as_ref())?;
        let tables: Tables = serde_json::from_str(&data)?;
        if !tables.contains_key(FALLBACK_LANGUAGE) {
            return Err(I18nError::MissingFallback);
        }
        debug!(
            path = %path.as_ref().display(),
            languages = tables.len(),
            "language table loaded"
        );
        let language = resolve(&tables, language);
        Ok(Translator { tables, language })
    }

    /// The active language code after fallback resolution.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn available_languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Switch the active language, falling back as in construction.
    pub fn set_language(&mut self, language: &str) {
        self.language = resolve(&self.tables, language);
    }

    /// Look up a message key in the active language. An absent key is
    /// echoed back so missing strings stay visible.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.tables
            .get(&self.language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

fn resolve(tables: &Tables, language: &str) -> String {
    if tables.contains_key(language) {
        language.to_string()
    } else {
        warn!(language = %language, "language not in table, falling back");
        FALLBACK_LANGUAGE.to_string()
    }
}
