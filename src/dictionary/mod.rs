//! Keyword Dictionary
//!
//! Loading and lookup of the reference dictionary.
//! Loading order: built-in < user config directory < command line.

pub mod registry;
pub mod schema;

pub use registry::KeywordDictionary;
pub use schema::{DictionaryFile, KeywordList};

use anyhow::Result;

use crate::config::Config;

/// Build the dictionary for a configuration.
///
/// Missing user config files are skipped; any file that exists but fails to
/// load is an error.
pub fn load_dictionary(config: &Config) -> Result<KeywordDictionary> {
    let mut dictionary = KeywordDictionary::builtin()?;

    for path in config.user_keyword_files.iter().filter(|p| p.exists()) {
        dictionary.merge(KeywordDictionary::load_from_path(path)?);
        log::info!("Loaded user keyword dictionary: {}", path.display());
    }

    for path in &config.keyword_files {
        dictionary.merge(KeywordDictionary::load_from_path(path)?);
        log::info!("Loaded keyword dictionary: {}", path.display());
    }

    log::debug!(
        "Keyword dictionary ready: {} sections, {} keywords",
        dictionary.section_ids().len(),
        dictionary.keyword_count()
    );

    Ok(dictionary)
}
