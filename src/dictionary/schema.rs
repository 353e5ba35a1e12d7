//! Dictionary File Schema
//!
//! On-disk shape of a keyword dictionary. Sections map either to an object of
//! `keyword -> marker` (presence = valid) or to a plain list of keywords.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Root dictionary file structure (JSON or TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DictionaryFile {
    pub sections: BTreeMap<String, KeywordList>,
}

/// Keywords of one section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum KeywordList {
    Markers(BTreeMap<String, Value>),
    List(Vec<String>),
}

impl KeywordList {
    /// Keywords marked present, as written in the file
    pub fn present_keywords(&self) -> Vec<&str> {
        match self {
            KeywordList::Markers(markers) => markers
                .iter()
                .filter(|(_, marker)| is_present(marker))
                .map(|(keyword, _)| keyword.as_str())
                .collect(),
            KeywordList::List(keywords) => keywords.iter().map(|k| k.as_str()).collect(),
        }
    }
}

/// Marker truthiness: `false`, `null`, `0` and `""` mean absent
fn is_present(marker: &Value) -> bool {
    match marker {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
