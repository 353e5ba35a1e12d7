//! Keyword Dictionary
//!
//! In-memory reference dictionary: section id -> set of normalized keywords.
//! Built once at startup and shared read-only between validation passes.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};

use super::schema::DictionaryFile;
use crate::parser::normalize_keyword;

/// Embedded dictionary shipped with the binary
const BUILTIN_KEYWORDS: &str = include_str!("../../resources/keywords.json");

/// Reference dictionary of recognized keywords per section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordDictionary {
    sections: HashMap<String, HashSet<String>>,
    /// Union of every section, for the cross-section fallback
    all: HashSet<String>,
}

impl From<DictionaryFile> for KeywordDictionary {
    fn from(file: DictionaryFile) -> Self {
        let mut dictionary = Self::default();
        for (section, keywords) in &file.sections {
            let section = normalize_keyword(section);
            for keyword in keywords.present_keywords() {
                dictionary.insert(&section, keyword);
            }
            // Keep empty sections: a known section with no keywords still gets checked
            dictionary.sections.entry(section).or_default();
        }
        dictionary
    }
}

impl KeywordDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary embedded at build time
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_KEYWORDS).context("Failed to parse built-in keyword dictionary")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: DictionaryFile =
            serde_json::from_str(content).context("Invalid JSON keyword dictionary")?;
        Ok(Self::from(file))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: DictionaryFile =
            toml::from_str(content).context("Invalid TOML keyword dictionary")?;
        Ok(Self::from(file))
    }

    /// Load a dictionary file; `.toml` files are read as TOML, anything else as JSON
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword dictionary: {}", path.display()))?;

        let is_toml = path.extension().and_then(|s| s.to_str()) == Some("toml");
        let parsed = if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        };

        parsed.with_context(|| format!("Failed to load keyword dictionary: {}", path.display()))
    }

    /// Add a keyword to a section. Both are normalized first.
    pub fn insert(&mut self, section: &str, keyword: &str) {
        let keyword = normalize_keyword(keyword);
        if keyword.is_empty() {
            return;
        }
        self.all.insert(keyword.clone());
        self.sections
            .entry(normalize_keyword(section))
            .or_default()
            .insert(keyword);
    }

    /// Union another dictionary into this one
    pub fn merge(&mut self, other: KeywordDictionary) {
        for (section, keywords) in other.sections {
            let entry = self.sections.entry(section).or_default();
            for keyword in keywords {
                self.all.insert(keyword.clone());
                entry.insert(keyword);
            }
        }
    }

    /// Keyword set of a section, if the section is known
    pub fn section(&self, id: &str) -> Option<&HashSet<String>> {
        self.sections.get(id)
    }

    pub fn contains(&self, section: &str, keyword: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|keywords| keywords.contains(keyword))
    }

    /// Whether any section recognizes the keyword
    pub fn contains_anywhere(&self, keyword: &str) -> bool {
        self.all.contains(keyword)
    }

    /// Known section ids, sorted
    pub fn section_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sections.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of distinct keywords across all sections
    pub fn keyword_count(&self) -> usize {
        self.all.len()
    }
}
