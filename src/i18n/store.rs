// SPDX-License-Identifier: MPL-2.0
//! Active-language state and dotted-key translation lookup.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// One of the two supported display languages.
///
/// The site is deliberately bilingual: the toggle is a binary flip, not a
/// cycle through an open-ended locale list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    /// The other supported language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    /// Uppercase language tag, as shown in the UI.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Language::Fr => "FR",
            Language::En => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("fr") {
            Ok(Language::Fr)
        } else if s.eq_ignore_ascii_case("en") {
            Ok(Language::En)
        } else {
            Err(Error::Locale(format!("unsupported language tag: {s}")))
        }
    }
}

/// A node in a translation document: either a display string or a nested
/// mapping of key segments to further nodes.
///
/// Deserialization accepts nothing else, so a document containing a number,
/// array, or null anywhere is rejected whole at parse time rather than
/// surprising a lookup later.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Leaf(String),
    Mapping(HashMap<String, TranslationNode>),
}

/// An immutable tree of display strings for one language.
///
/// The root must be a mapping; a document whose top level is a bare string
/// or any other JSON value fails to parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct TranslationDocument {
    root: HashMap<String, TranslationNode>,
}

impl TranslationDocument {
    /// Parses a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::from)
    }

    /// Reads and parses a document from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Resolves a dot-delimited key to the display string stored at that
    /// path.
    ///
    /// Returns `None` when a segment is missing, when descent runs through a
    /// leaf before the key is exhausted, or when the full path stops on a
    /// mapping instead of a leaf. Segments are case-sensitive and literal
    /// dots cannot be escaped.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            match node {
                TranslationNode::Leaf(_) => return None,
                TranslationNode::Mapping(children) => node = children.get(segment)?,
            }
        }
        match node {
            TranslationNode::Leaf(text) => Some(text),
            TranslationNode::Mapping(_) => None,
        }
    }
}

/// Owns the current language selection and both translation documents.
///
/// Constructed explicitly and passed by reference to consumers; there is no
/// ambient global instance. The selection always starts at French and is not
/// persisted across sessions.
#[derive(Debug, Clone)]
pub struct LocalizationStore {
    current: Language,
    fr: TranslationDocument,
    en: TranslationDocument,
}

impl LocalizationStore {
    /// Builds a store from two already-parsed documents.
    #[must_use]
    pub fn new(fr: TranslationDocument, en: TranslationDocument) -> Self {
        Self {
            current: Language::default(),
            fr,
            en,
        }
    }

    /// Builds a store from the embedded `assets/i18n/*.json` documents.
    ///
    /// Fails if either document is missing, names an unsupported language,
    /// or does not parse as a translation tree.
    pub fn load() -> Result<Self> {
        let mut fr = None;
        let mut en = None;

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(tag) = filename.strip_suffix(".json") else {
                continue;
            };
            let language: Language = tag.parse()?;
            let content = Asset::get(filename)
                .ok_or_else(|| Error::Locale(format!("missing embedded document: {filename}")))?;
            let text = String::from_utf8_lossy(content.data.as_ref());
            let document = TranslationDocument::from_json(&text)
                .map_err(|e| Error::Locale(format!("{filename}: {e}")))?;
            match language {
                Language::Fr => fr = Some(document),
                Language::En => en = Some(document),
            }
        }

        match (fr, en) {
            (Some(fr), Some(en)) => Ok(Self::new(fr, en)),
            _ => Err(Error::Locale(
                "embedded translation documents incomplete: need fr.json and en.json".to_string(),
            )),
        }
    }

    /// The language `resolve` currently reads from.
    #[must_use]
    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Flips the active language. Subsequent `resolve` calls read the other
    /// document immediately.
    pub fn toggle_language(&mut self) {
        self.current = self.current.toggled();
    }

    /// Resolves a dot-delimited key against the active document.
    ///
    /// Never fails: when the key does not lead to a display string the key
    /// itself comes back, which stands out in the rendered UI as a missing
    /// translation.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        match self.active_document().get(key) {
            Some(text) => text.to_string(),
            None => {
                log::debug!("missing {} translation for key '{key}'", self.current);
                key.to_string()
            }
        }
    }

    fn active_document(&self) -> &TranslationDocument {
        match self.current {
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }
}
