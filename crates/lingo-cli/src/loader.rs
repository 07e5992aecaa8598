//! Reading dictionaries and JSON inputs from disk.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use lingo::Dictionary;
use miette::{miette, IntoDiagnostic, Result};
use serde::de::DeserializeOwned;

use crate::output::JsonDiagnostic;

/// Load and layer dictionary files. Files listed earlier win on conflict.
pub fn load_dictionaries(paths: &[PathBuf]) -> Result<Dictionary> {
    let mut layered = Dictionary::new();
    for path in paths {
        let dictionary = load_dictionary(path)?;
        tracing::debug!(path = %path.display(), keys = dictionary.len(), "loaded dictionary");
        layered = layered.merged_with(&dictionary);
    }
    Ok(layered)
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let content = read_file(path)?;
    Dictionary::from_json_str(&path.display().to_string(), &content).map_err(|e| {
        match JsonDiagnostic::from_load_error(path, &content, &e) {
            Some(diagnostic) => diagnostic.into(),
            None => miette!("{e}"),
        }
    })
}

/// Load any JSON document (interpolation data, page dictionaries).
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to parse {}: {}", path.display(), e))
}

fn read_file(path: &Path) -> Result<String> {
    read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Cannot read {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use lingo::PageDictionary;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn earlier_files_win() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("site.json");
        let shared = dir.path().join("shared.json");
        fs::write(&site, r#"{"hello": {"en": "Hi there"}}"#).unwrap();
        fs::write(&shared, r#"{"hello": {"en": "Hello", "es": "Hola"}, "bye": {"en": "Bye"}}"#)
            .unwrap();

        let dictionary = load_dictionaries(&[site, shared]).unwrap();
        assert_eq!(dictionary.get("hello", "en"), Some("Hi there"));
        assert_eq!(dictionary.get("hello", "es"), Some("Hola"));
        assert_eq!(dictionary.get("bye", "en"), Some("Bye"));
    }

    #[test]
    fn syntax_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{\n  \"hello\": \n}").unwrap();

        let err = load_dictionaries(&[broken]).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = load_dictionaries(&[dir.path().join("nope.json")]).unwrap_err();
        assert!(err.to_string().contains("Cannot read"));
    }

    #[test]
    fn loads_page_dictionary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.json");
        fs::write(&path, r#"{"title": "About"}"#).unwrap();

        let page: PageDictionary = load_json(&path).unwrap();
        assert!(!page.is_empty());
    }
}
