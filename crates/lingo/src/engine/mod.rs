//! The translation engine.
//!
//! Looks a key up in the preferred locale, then in its fallback locale, and
//! finally gives up by rendering the key itself. Every outcome is a value;
//! misses are reported as [`Diagnostic`]s, never as errors.

mod diagnostic;
mod lookup;
mod render;

use crate::dictionary::Dictionary;
use crate::locale::FallbackMap;
use crate::types::Data;

pub use diagnostic::{Diagnostic, Severity};
pub use lookup::{DictionaryLookup, Lookup, NotFoundHandler};
pub use render::interpolate;

/// The outcome of resolving one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Rendered text, or the raw key when nothing was found.
    pub text: String,
    /// Misses encountered along the way, in order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Translation {
    fn found(text: String) -> Self {
        Translation {
            text,
            diagnostics: Vec::new(),
        }
    }

    /// Whether a translation (preferred or fallback) was found.
    pub fn is_found(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::Missing { .. }))
    }
}

/// Behavior switches for [`translate`].
pub struct Options<'a> {
    /// Strategy used for both the preferred and the fallback lookup.
    pub lookup: &'a dyn Lookup,
    /// Replaces the raw key as the text of a miss.
    pub not_found: Option<&'a dyn NotFoundHandler>,
    /// Substitute data into resolved templates.
    pub interpolate: bool,
    /// Drop the fallback warning.
    pub silent: bool,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Options {
            lookup: &DictionaryLookup,
            not_found: None,
            interpolate: true,
            silent: false,
        }
    }
}

/// Resolve `key` for `locale`, falling back through `fallbacks`.
///
/// 1. Preferred lookup in `locale`; a hit is rendered with no diagnostic.
/// 2. Fallback lookup in the single-hop fallback of `locale`; a hit is
///    rendered with a [`Diagnostic::FallbackUsed`] warning unless silent.
/// 3. Otherwise the key itself (or the not-found handler's text) is
///    returned uninterpolated with a [`Diagnostic::Missing`] error.
///
/// # Example
///
/// ```
/// use lingo::{Data, Dictionary, FallbackMap, Options, translate};
///
/// let dictionary = Dictionary::from_json_str("<inline>", r#"{
///     "greet": { "en-GB": "Hello", "es-ES": "Hola" }
/// }"#).unwrap();
/// let fallbacks = FallbackMap::wildcard("en-GB");
///
/// let translation = translate(
///     "greet", &Data::new(), Some("fr-FR"), &fallbacks, &dictionary, &Options::default(),
/// );
/// assert_eq!(translation.text, "Hello");
/// assert_eq!(translation.diagnostics.len(), 1);
/// ```
pub fn translate(
    key: &str,
    data: &Data,
    locale: Option<&str>,
    fallbacks: &FallbackMap,
    dictionary: &Dictionary,
    options: &Options<'_>,
) -> Translation {
    let render = |template: String| {
        if options.interpolate {
            interpolate(&template, data)
        } else {
            template
        }
    };

    if let Some(template) =
        locale.and_then(|locale| options.lookup.lookup(key, locale, dictionary, data))
    {
        return Translation::found(render(template));
    }

    let fallback_locale = fallbacks.resolve(locale);
    let fallback = fallback_locale
        .and_then(|fallback| options.lookup.lookup(key, fallback, dictionary, data));

    if let (Some(template), Some(fallback_locale)) = (fallback, fallback_locale) {
        let mut translation = Translation::found(render(template));
        if !options.silent {
            translation.diagnostics.push(Diagnostic::FallbackUsed {
                key: key.to_string(),
                locale: locale.map(str::to_string),
                fallback_locale: fallback_locale.to_string(),
            });
        }
        return translation;
    }

    let text = options
        .not_found
        .and_then(|handler| handler.not_found(key, locale))
        .unwrap_or_else(|| key.to_string());
    Translation {
        text,
        diagnostics: vec![Diagnostic::Missing {
            key: key.to_string(),
            locale: locale.map(str::to_string),
            fallback_locale: fallback_locale.map(str::to_string),
        }],
    }
}
