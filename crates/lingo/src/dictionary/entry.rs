//! Untyped dictionary input as it arrives from JSON.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A raw dictionary entry: either terminal text or a nested mapping.
///
/// Numbers and booleans are accepted as terminals and stored in their
/// textual form, so `0` and `false` remain valid translations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "EntryRepr")]
pub enum Entry {
    Text(String),
    Map(BTreeMap<String, Entry>),
}

impl Entry {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Text(text) => Some(text),
            Entry::Map(_) => None,
        }
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::Text(text.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryRepr {
    Text(String),
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Map(BTreeMap<String, Entry>),
}

impl From<EntryRepr> for Entry {
    fn from(repr: EntryRepr) -> Self {
        match repr {
            EntryRepr::Text(text) => Entry::Text(text),
            EntryRepr::Bool(b) => Entry::Text(b.to_string()),
            EntryRepr::Integer(n) => Entry::Text(n.to_string()),
            EntryRepr::Unsigned(n) => Entry::Text(n.to_string()),
            EntryRepr::Float(n) => Entry::Text(n.to_string()),
            EntryRepr::Map(children) => Entry::Map(children),
        }
    }
}

/// Inline translations contributed by a single page.
///
/// Unlike a [`Dictionary`](super::Dictionary), terminal strings here carry
/// no locale level: they are filed under the page's resolved locale when
/// merged.
///
/// # Example
///
/// ```
/// use lingo::PageDictionary;
///
/// let page: PageDictionary = serde_json::from_str(r#"{"title": "About us"}"#).unwrap();
/// assert!(!page.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PageDictionary(BTreeMap<String, Entry>);

impl PageDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<Entry>) {
        self.0.insert(key.into(), entry.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.0.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl<K: Into<String>> FromIterator<(K, Entry)> for PageDictionary {
    fn from_iter<I: IntoIterator<Item = (K, Entry)>>(iter: I) -> Self {
        PageDictionary(iter.into_iter().map(|(k, e)| (k.into(), e)).collect())
    }
}
