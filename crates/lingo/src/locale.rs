//! Locale resolution.
//!
//! Derives the locale for a lookup from an explicit override or from page
//! metadata, and the fallback locale from a [`FallbackMap`].

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::parser::parse_locale_prefix;
use crate::types::PageContext;

/// Wildcard key in a fallback map.
pub const WILDCARD: &str = "*";

/// Which page signal a configuration reads the locale from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocaleStrategy {
    /// First segment of the page URL: `/es-ES/about/` → `es-ES`.
    #[default]
    UrlSegment,

    /// Locale-looking prefix of the input file path stem.
    FilePathStem,

    /// The page's `lang` attribute, verbatim.
    PageLang,
}

impl LocaleStrategy {
    /// Extract a locale from `page`, if this strategy finds one.
    pub fn infer<'a>(self, page: &'a PageContext) -> Option<&'a str> {
        let locale = match self {
            LocaleStrategy::UrlSegment => page.url()?.split('/').nth(1),
            LocaleStrategy::FilePathStem => parse_locale_prefix(page.file_path_stem()?),
            LocaleStrategy::PageLang => page.lang(),
        };
        locale.filter(|l| !l.is_empty())
    }
}

/// Resolve the effective locale for a lookup.
///
/// A non-empty `locale_override` wins unconditionally; otherwise the locale
/// is inferred from `page` using `strategy`. Returns `None` when neither
/// yields a value, in which case lookups will miss.
///
/// # Example
///
/// ```
/// use lingo::{LocaleStrategy, PageContext, resolve_locale};
///
/// let page = PageContext::builder().url("/es-ES/about/").build();
/// assert_eq!(resolve_locale(None, &page, LocaleStrategy::UrlSegment), Some("es-ES"));
/// assert_eq!(resolve_locale(Some("fr-FR"), &page, LocaleStrategy::UrlSegment), Some("fr-FR"));
/// ```
pub fn resolve_locale<'a>(
    locale_override: Option<&'a str>,
    page: &'a PageContext,
    strategy: LocaleStrategy,
) -> Option<&'a str> {
    locale_override
        .filter(|l| !l.is_empty())
        .or_else(|| strategy.infer(page))
}

/// Locale substitution table used when the preferred locale misses.
///
/// Resolution is a single hop: the locale's own entry, else the `*`
/// wildcard. The fallback's fallback is never consulted.
///
/// # Example
///
/// ```
/// use lingo::FallbackMap;
///
/// let fallbacks: FallbackMap = [("es-MX", "es-ES"), ("*", "en-GB")].into_iter().collect();
/// assert_eq!(fallbacks.resolve(Some("es-MX")), Some("es-ES"));
/// assert_eq!(fallbacks.resolve(Some("de-DE")), Some("en-GB"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct FallbackMap {
    entries: BTreeMap<String, String>,
    wildcard: Option<String>,
}

impl FallbackMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map that sends every locale to `locale`.
    pub fn wildcard(locale: impl Into<String>) -> Self {
        FallbackMap {
            entries: BTreeMap::new(),
            wildcard: Some(locale.into()),
        }
    }

    /// Add a fallback for `locale`. A `locale` of `*` sets the wildcard.
    pub fn insert(&mut self, locale: impl Into<String>, fallback: impl Into<String>) {
        let locale = locale.into();
        let fallback = fallback.into();
        if locale == WILDCARD {
            self.wildcard = Some(fallback);
        } else {
            self.entries.insert(locale, fallback);
        }
    }

    /// The fallback configured for `locale`, else the wildcard.
    pub fn resolve(&self, locale: Option<&str>) -> Option<&str> {
        locale
            .and_then(|l| self.entries.get(l))
            .or(self.wildcard.as_ref())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.wildcard.is_none()
    }
}

impl<L: Into<String>, F: Into<String>> FromIterator<(L, F)> for FallbackMap {
    fn from_iter<I: IntoIterator<Item = (L, F)>>(iter: I) -> Self {
        let mut map = FallbackMap::new();
        for (locale, fallback) in iter {
            map.insert(locale, fallback);
        }
        map
    }
}

impl From<BTreeMap<String, String>> for FallbackMap {
    fn from(entries: BTreeMap<String, String>) -> Self {
        entries.into_iter().collect()
    }
}
