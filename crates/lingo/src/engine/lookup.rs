//! Pluggable lookup and miss-handling strategies.

use crate::dictionary::Dictionary;
use crate::types::Data;

/// Finds the template for a key in a locale.
///
/// `None` is the only "not found" answer; any `Some`, including an empty
/// string, is a translation.
///
/// The engine calls this once for the preferred locale and once for the
/// fallback locale. The preferred stage only runs when a locale was
/// resolved: with no locale, the first call is for the fallback (if any),
/// so a lookup never sees an empty or placeholder locale.
///
/// Closures with the matching signature implement this trait:
///
/// ```
/// use lingo::{Data, Dictionary, Lookup};
///
/// let upper = |key: &str, _locale: &str, _dictionary: &Dictionary, _data: &Data| {
///     Some(key.to_uppercase())
/// };
/// assert_eq!(
///     upper.lookup("hi", "en", &Dictionary::new(), &Data::new()),
///     Some("HI".to_string()),
/// );
/// ```
pub trait Lookup: Send + Sync {
    fn lookup(&self, key: &str, locale: &str, dictionary: &Dictionary, data: &Data)
    -> Option<String>;
}

impl<F> Lookup for F
where
    F: Fn(&str, &str, &Dictionary, &Data) -> Option<String> + Send + Sync,
{
    fn lookup(
        &self,
        key: &str,
        locale: &str,
        dictionary: &Dictionary,
        data: &Data,
    ) -> Option<String> {
        self(key, locale, dictionary, data)
    }
}

/// The default lookup: `dictionary[key][locale]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryLookup;

impl Lookup for DictionaryLookup {
    fn lookup(
        &self,
        key: &str,
        locale: &str,
        dictionary: &Dictionary,
        _data: &Data,
    ) -> Option<String> {
        dictionary.get(key, locale).map(str::to_string)
    }
}

/// Produces the text shown when no translation exists.
///
/// Returning `None` keeps the default behavior of rendering the key.
pub trait NotFoundHandler: Send + Sync {
    fn not_found(&self, key: &str, locale: Option<&str>) -> Option<String>;
}

impl<F> NotFoundHandler for F
where
    F: Fn(&str, Option<&str>) -> Option<String> + Send + Sync,
{
    fn not_found(&self, key: &str, locale: Option<&str>) -> Option<String> {
        self(key, locale)
    }
}
