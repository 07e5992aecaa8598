//! Immutable translation configuration.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bon::Builder;

use crate::dictionary::{Dictionary, PageDictionary, merge};
use crate::engine::{DictionaryLookup, Lookup, NotFoundHandler, Options, Translation, translate};
use crate::locale::{FallbackMap, LocaleStrategy, resolve_locale};
use crate::types::{Data, PageContext};

static EMPTY_DATA: Data = BTreeMap::new();

/// A snapshot of everything a translation call needs besides its inputs.
///
/// Configurations are never mutated once built; see
/// [`ConfigStore`](crate::ConfigStore) for swapping them between rebuilds.
///
/// # Example
///
/// ```
/// use lingo::{Config, Dictionary, FallbackMap, PageContext, data};
///
/// let dictionary = Dictionary::from_json_str("<inline>", r#"{
///     "hello_name": { "en-GB": "Hello, {{ name }}!", "es-ES": "¡Hola {{ name }}!" }
/// }"#).unwrap();
///
/// let config = Config::builder()
///     .dictionary(dictionary)
///     .fallbacks(FallbackMap::wildcard("en-GB"))
///     .build();
///
/// let page = PageContext::builder().url("/es-ES/").build();
/// let text = config.translate_key("hello_name", &data! { "name" => "Ada" }, None, &page);
/// assert_eq!(text, "¡Hola Ada!");
/// ```
#[derive(Clone, Builder)]
pub struct Config {
    /// Base dictionary shared by every page.
    #[builder(default)]
    dictionary: Dictionary,

    /// Locale substitutions used when the preferred locale misses.
    #[builder(default)]
    fallbacks: FallbackMap,

    /// Replaces the default `dictionary[key][locale]` lookup.
    lookup: Option<Arc<dyn Lookup>>,

    /// Replaces the raw key as the text of a miss.
    not_found: Option<Arc<dyn NotFoundHandler>>,

    /// Substitute data into resolved templates.
    #[builder(default = true)]
    interpolate: bool,

    /// Suppress fallback warnings.
    #[builder(default)]
    silent: bool,

    /// Page signal the locale is inferred from.
    #[builder(default)]
    strategy: LocaleStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Config")
            .field("dictionary", &self.dictionary)
            .field("fallbacks", &self.fallbacks)
            .field("custom_lookup", &self.lookup.is_some())
            .field("custom_not_found", &self.not_found.is_some())
            .field("interpolate", &self.interpolate)
            .field("silent", &self.silent)
            .field("strategy", &self.strategy)
            .finish()
    }
}

/// The inputs of a single translation call.
#[derive(Debug, Clone, Copy, Builder)]
pub struct Request<'a> {
    /// Translation key, literal or dot-path.
    key: &'a str,

    /// Interpolation data.
    data: Option<&'a Data>,

    /// Explicit locale; wins over anything inferred from the page.
    locale: Option<&'a str>,

    /// Page the translation is rendered on.
    page: Option<&'a PageContext>,

    /// Inline translations contributed by the page.
    page_dictionary: Option<&'a PageDictionary>,
}

impl Config {
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn fallbacks(&self) -> &FallbackMap {
        &self.fallbacks
    }

    pub fn strategy(&self) -> LocaleStrategy {
        self.strategy
    }

    /// A copy of this configuration with a different base dictionary.
    pub fn with_dictionary(&self, dictionary: Dictionary) -> Config {
        Config {
            dictionary,
            ..self.clone()
        }
    }

    /// The locale a request resolves to under this configuration.
    pub fn resolve_locale<'a>(&self, request: &Request<'a>) -> Option<&'a str> {
        match request.page {
            Some(page) => resolve_locale(request.locale, page, self.strategy),
            None => request.locale.filter(|l| !l.is_empty()),
        }
    }

    /// Resolve a request, returning the text and any diagnostics.
    pub fn translate(&self, request: &Request<'_>) -> Translation {
        let locale = self.resolve_locale(request);
        let dictionary = match request.page_dictionary {
            Some(page_dictionary) => merge(locale, page_dictionary, &self.dictionary),
            None => Cow::Borrowed(&self.dictionary),
        };
        let options = Options {
            lookup: self.lookup.as_deref().unwrap_or(&DictionaryLookup),
            not_found: self.not_found.as_deref(),
            interpolate: self.interpolate,
            silent: self.silent,
        };

        translate(
            request.key,
            request.data.unwrap_or(&EMPTY_DATA),
            locale,
            &self.fallbacks,
            &dictionary,
            &options,
        )
    }

    /// Translate `key` for a page, logging any diagnostics.
    ///
    /// This is the call a templating layer makes: the text is always
    /// renderable, and misses surface only as `tracing` events.
    pub fn translate_key(
        &self,
        key: &str,
        data: &Data,
        locale_override: Option<&str>,
        page: &PageContext,
    ) -> String {
        let request = Request::builder()
            .key(key)
            .data(data)
            .maybe_locale(locale_override)
            .page(page)
            .build();
        let translation = self.translate(&request);
        for diagnostic in &translation.diagnostics {
            diagnostic.emit();
        }
        translation.text
    }
}
