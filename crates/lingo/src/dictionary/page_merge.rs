//! Merging page-local translations into a base dictionary.

use std::borrow::Cow;
use std::collections::BTreeMap;

use super::{Dictionary, Entry, Node, PageDictionary, Translations};

/// Merge a page's inline translations into `base` for `locale`.
///
/// Text entries are filed under `locale`. A mapping that lands on an
/// existing leaf is read as locale-keyed overrides for that leaf; a mapping
/// anywhere else nests keys. Existing translations always win over page
/// entries, so the page can only add locales or keys the base lacks. Shape
/// conflicts are ignored.
///
/// The base is never modified; when the page contributes nothing it is
/// returned borrowed.
///
/// # Example
///
/// ```
/// use lingo::{Dictionary, Entry, PageDictionary, merge};
///
/// let base = Dictionary::from_json_str("<base>", r#"{"hello": {"en": "Hi"}}"#).unwrap();
/// let mut page = PageDictionary::new();
/// page.insert("hello", "Yo");
/// page.insert("title", "About");
///
/// let merged = merge(Some("en"), &page, &base);
/// assert_eq!(merged.get("hello", "en"), Some("Hi"));
/// assert_eq!(merged.get("title", "en"), Some("About"));
/// ```
pub fn merge<'a>(
    locale: Option<&str>,
    page: &PageDictionary,
    base: &'a Dictionary,
) -> Cow<'a, Dictionary> {
    if page.is_empty() {
        return Cow::Borrowed(base);
    }

    let mut merged = base.clone();
    for (key, entry) in page.iter() {
        merge_entry(locale, key, entry, merged.root_mut());
    }
    Cow::Owned(merged)
}

fn merge_entry(
    locale: Option<&str>,
    key: &str,
    entry: &Entry,
    children: &mut BTreeMap<String, Node>,
) {
    match (entry, children.get_mut(key)) {
        (Entry::Text(text), None) => {
            if let Some(locale) = locale {
                children.insert(key.to_string(), Node::leaf([(locale, text.as_str())]));
            }
        }
        (Entry::Text(text), Some(Node::Leaf(translations))) => {
            if let Some(locale) = locale {
                add_missing(translations, locale, text);
            }
        }
        (Entry::Map(overrides), Some(Node::Leaf(translations))) => {
            for (entry_locale, child) in overrides {
                if let Entry::Text(text) = child {
                    add_missing(translations, entry_locale, text);
                }
            }
        }
        (Entry::Map(nested), Some(Node::Branch(grandchildren))) => {
            for (child_key, child) in nested {
                merge_entry(locale, child_key, child, grandchildren);
            }
        }
        (Entry::Map(nested), None) => {
            let mut grandchildren = BTreeMap::new();
            for (child_key, child) in nested {
                merge_entry(locale, child_key, child, &mut grandchildren);
            }
            if !grandchildren.is_empty() {
                children.insert(key.to_string(), Node::Branch(grandchildren));
            }
        }
        (Entry::Text(_), Some(Node::Branch(_))) => {
            tracing::debug!(key, "page text collides with nested dictionary keys");
        }
    }
}

fn add_missing(translations: &mut Translations, locale: &str, text: &str) {
    translations
        .entry(locale.to_string())
        .or_insert_with(|| text.to_string());
}
