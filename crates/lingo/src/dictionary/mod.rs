//! Translation dictionaries.
//!
//! A dictionary is a tree of [`Node`]s. Internal nodes map keys to further
//! nodes; leaves map locale identifiers to translation templates. No node
//! mixes the two shapes, and every lookup that runs into the wrong shape is
//! treated as a miss.

mod entry;
mod page_merge;

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::LoadError;

pub use entry::{Entry, PageDictionary};
pub use page_merge::merge;

/// Locale identifier to translation template.
pub type Translations = BTreeMap<String, String>;

/// A node in the dictionary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Per-locale translations for a single key.
    Leaf(Translations),

    /// Nested keys.
    Branch(BTreeMap<String, Node>),
}

impl Node {
    /// Build a leaf from `(locale, text)` pairs.
    pub fn leaf<L, T>(translations: impl IntoIterator<Item = (L, T)>) -> Self
    where
        L: Into<String>,
        T: Into<String>,
    {
        Node::Leaf(
            translations
                .into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }

    pub fn as_leaf(&self) -> Option<&Translations> {
        match self {
            Node::Leaf(translations) => Some(translations),
            Node::Branch(_) => None,
        }
    }

    fn from_entries(children: BTreeMap<String, Entry>) -> Self {
        if children.values().all(|entry| entry.as_text().is_some()) {
            return Node::Leaf(
                children
                    .into_iter()
                    .filter_map(|(locale, entry)| match entry {
                        Entry::Text(text) => Some((locale, text)),
                        Entry::Map(_) => None,
                    })
                    .collect(),
            );
        }
        Node::Branch(branch_from_entries(children))
    }

    /// Merge `overlay` into `self`, keeping existing entries on conflict.
    fn absorb(&mut self, overlay: &Node) {
        match (self, overlay) {
            (Node::Leaf(existing), Node::Leaf(incoming)) => {
                for (locale, text) in incoming {
                    existing
                        .entry(locale.clone())
                        .or_insert_with(|| text.clone());
                }
            }
            (Node::Branch(existing), Node::Branch(incoming)) => {
                absorb_branch(existing, incoming);
            }
            (Node::Leaf(_), Node::Branch(_)) | (Node::Branch(_), Node::Leaf(_)) => {
                tracing::debug!("dictionary shape conflict, keeping existing node");
            }
        }
    }
}

fn branch_from_entries(children: BTreeMap<String, Entry>) -> BTreeMap<String, Node> {
    children
        .into_iter()
        .filter_map(|(key, entry)| match entry {
            Entry::Map(grandchildren) => Some((key, Node::from_entries(grandchildren))),
            Entry::Text(_) => {
                tracing::debug!(key = %key, "dropping text entry mixed with nested keys");
                None
            }
        })
        .collect()
}

fn absorb_branch(existing: &mut BTreeMap<String, Node>, incoming: &BTreeMap<String, Node>) {
    for (key, node) in incoming {
        match existing.get_mut(key) {
            Some(current) => current.absorb(node),
            None => {
                existing.insert(key.clone(), node.clone());
            }
        }
    }
}

/// A nested key → locale → template translation store.
///
/// Keys are addressed either literally (`"hello"`) or by dot-path into
/// nested keys (`"nav.home"`).
///
/// # Example
///
/// ```
/// use lingo::Dictionary;
///
/// let dictionary = Dictionary::from_json_str("<inline>", r#"{
///     "hello": { "en-GB": "Hello", "es-ES": "Hola" },
///     "nav": { "home": { "en-GB": "Home" } }
/// }"#).unwrap();
///
/// assert_eq!(dictionary.get("hello", "es-ES"), Some("Hola"));
/// assert_eq!(dictionary.get("nav.home", "en-GB"), Some("Home"));
/// assert_eq!(dictionary.get("nav", "en-GB"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Entry>")]
pub struct Dictionary {
    root: BTreeMap<String, Node>,
}

impl From<BTreeMap<String, Entry>> for Dictionary {
    fn from(entries: BTreeMap<String, Entry>) -> Self {
        Dictionary {
            root: branch_from_entries(entries),
        }
    }
}

impl From<BTreeMap<String, Node>> for Dictionary {
    fn from(root: BTreeMap<String, Node>) -> Self {
        Dictionary { root }
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Dictionary {
            root: iter.into_iter().map(|(k, n)| (k.into(), n)).collect(),
        }
    }
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from JSON text.
    ///
    /// `origin` names the input in error messages (usually a file path).
    /// Malformed nodes are dropped rather than rejected.
    pub fn from_json_str(origin: &str, content: &str) -> Result<Self, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::from_json(origin, &e))
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Find the node addressed by `key`.
    ///
    /// An exact top-level key wins; otherwise `key` is walked as a dot-path
    /// through branch nodes.
    pub fn node(&self, key: &str) -> Option<&Node> {
        if let Some(node) = self.root.get(key) {
            return Some(node);
        }
        let mut segments = key.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            let Node::Branch(children) = current else {
                return None;
            };
            current = children.get(segment)?;
        }
        Some(current)
    }

    /// All translations stored for `key`, if it addresses a leaf.
    pub fn translations(&self, key: &str) -> Option<&Translations> {
        self.node(key).and_then(Node::as_leaf)
    }

    /// Look up the template for `key` in `locale`.
    pub fn get(&self, key: &str, locale: &str) -> Option<&str> {
        self.translations(key)?.get(locale).map(String::as_str)
    }

    /// Insert a translation at a dot-path, creating branches as needed.
    ///
    /// Returns `false` without modifying anything if an existing node of the
    /// wrong shape is in the way.
    pub fn insert(&mut self, key: &str, locale: &str, text: impl Into<String>) -> bool {
        let segments: Vec<&str> = key.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return false;
        };

        let mut children = &mut self.root;
        for segment in parents {
            let node = children
                .entry((*segment).to_string())
                .or_insert_with(|| Node::Branch(BTreeMap::new()));
            let Node::Branch(next) = node else {
                return false;
            };
            children = next;
        }

        let node = children
            .entry((*last).to_string())
            .or_insert_with(|| Node::Leaf(Translations::new()));
        let Node::Leaf(translations) = node else {
            return false;
        };
        translations.insert(locale.to_string(), text.into());
        true
    }

    /// Combine two dictionaries into a new one.
    ///
    /// Entries already present in `self` win; keys and locales that exist
    /// only in `overlay` are added. Neither input is modified.
    pub fn merged_with(&self, overlay: &Dictionary) -> Dictionary {
        let mut merged = self.clone();
        absorb_branch(&mut merged.root, &overlay.root);
        merged
    }

    /// Every leaf with its full dot-path, in key order.
    pub fn leaves(&self) -> Vec<(String, &Translations)> {
        let mut leaves = Vec::new();
        collect_leaves(&self.root, "", &mut leaves);
        leaves
    }

    /// Every locale that has at least one translation.
    pub fn locales(&self) -> BTreeSet<&str> {
        self.leaves()
            .into_iter()
            .flat_map(|(_, translations)| translations.keys().map(String::as_str))
            .collect()
    }

    pub(crate) fn root_mut(&mut self) -> &mut BTreeMap<String, Node> {
        &mut self.root
    }
}

fn collect_leaves<'a>(
    children: &'a BTreeMap<String, Node>,
    prefix: &str,
    out: &mut Vec<(String, &'a Translations)>,
) {
    for (key, node) in children {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            Node::Leaf(translations) => out.push((path, translations)),
            Node::Branch(nested) => collect_leaves(nested, &path, out),
        }
    }
}
