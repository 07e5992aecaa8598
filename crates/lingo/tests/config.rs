//! Integration tests for configuration snapshots and the host-facing call.

use std::sync::Arc;

use lingo::{
    Config, Data, Dictionary, FallbackMap, LocaleStrategy, PageContext, PageDictionary, Request,
    data,
};
use serde_json::json;

fn sample() -> Dictionary {
    serde_json::from_value(json!({
        "hello": { "en-GB": "Hello", "es-ES": "Hola" },
        "hello_name": { "en-GB": "Hello, {{ name }}!", "es-ES": "¡Hola {{ name }}!" },
        "test": { "en-GB": "Test", "fr-FR": "Tester" }
    }))
    .unwrap()
}

fn config() -> Config {
    Config::builder()
        .dictionary(sample())
        .fallbacks(FallbackMap::wildcard("en-GB"))
        .build()
}

// =========================================================================
// Builder
// =========================================================================

#[test]
fn default_config_is_empty_and_interpolating() {
    let config = Config::default();
    assert!(config.dictionary().is_empty());
    assert!(config.fallbacks().is_empty());
    assert_eq!(config.strategy(), LocaleStrategy::UrlSegment);

    let text = config.translate_key("hello", &data! {}, Some("en"), &PageContext::default());
    assert_eq!(text, "hello");
}

#[test]
fn with_dictionary_keeps_other_options() {
    let config = Config::builder()
        .strategy(LocaleStrategy::PageLang)
        .silent(true)
        .build();
    let next = config.with_dictionary(sample());
    assert_eq!(next.strategy(), LocaleStrategy::PageLang);
    assert!(config.dictionary().is_empty());
    assert_eq!(next.dictionary().get("hello", "es-ES"), Some("Hola"));
}

// =========================================================================
// Locale Inference
// =========================================================================

#[test]
fn locale_is_inferred_from_url() {
    let page = PageContext::builder().url("/es-ES/about/").build();
    let text = config().translate_key("hello_name", &data! { "name" => "Ada" }, None, &page);
    assert_eq!(text, "¡Hola Ada!");
}

#[test]
fn override_beats_page_locale() {
    let page = PageContext::builder().url("/es-ES/about/").build();
    let text = config().translate_key("hello", &data! {}, Some("en-GB"), &page);
    assert_eq!(text, "Hello");
}

#[test]
fn strategy_selects_page_signal() {
    let page = PageContext::builder()
        .url("/en-GB/")
        .file_path_stem("/es-ES/index")
        .lang("fr-FR")
        .build();

    let by_url = config();
    assert_eq!(by_url.translate_key("test", &data! {}, None, &page), "Test");

    let by_stem = Config::builder()
        .dictionary(sample())
        .strategy(LocaleStrategy::FilePathStem)
        .build();
    assert_eq!(by_stem.translate_key("hello", &data! {}, None, &page), "Hola");

    let by_lang = Config::builder()
        .dictionary(sample())
        .strategy(LocaleStrategy::PageLang)
        .build();
    assert_eq!(by_lang.translate_key("test", &data! {}, None, &page), "Tester");
}

#[test]
fn request_without_page_uses_only_override() {
    let config = config();
    let request = Request::builder().key("hello").locale("es-ES").build();
    assert_eq!(config.resolve_locale(&request), Some("es-ES"));
    assert_eq!(config.translate(&request).text, "Hola");

    let request = Request::builder().key("hello").build();
    assert_eq!(config.resolve_locale(&request), None);
    let translation = config.translate(&request);
    assert_eq!(translation.text, "Hello");
    assert_eq!(translation.diagnostics.len(), 1);
}

// =========================================================================
// Page Dictionaries
// =========================================================================

#[test]
fn page_dictionary_adds_local_keys() {
    let page = PageContext::builder().url("/es-ES/").build();
    let local: PageDictionary =
        serde_json::from_value(json!({ "cta": "Comprar", "hello": "Buenas" })).unwrap();
    let config = config();

    let request = Request::builder()
        .key("cta")
        .page(&page)
        .page_dictionary(&local)
        .build();
    assert_eq!(config.translate(&request).text, "Comprar");

    let request = Request::builder()
        .key("hello")
        .page(&page)
        .page_dictionary(&local)
        .build();
    assert_eq!(config.translate(&request).text, "Hola");

    assert_eq!(config.dictionary().get("cta", "es-ES"), None);
}

// =========================================================================
// Options
// =========================================================================

#[test]
fn silent_config_drops_warning() {
    let config = Config::builder()
        .dictionary(sample())
        .fallbacks(FallbackMap::wildcard("en-GB"))
        .silent(true)
        .build();
    let request = Request::builder().key("hello").locale("it-IT").build();
    let translation = config.translate(&request);
    assert_eq!(translation.text, "Hello");
    assert!(translation.diagnostics.is_empty());
}

#[test]
fn interpolation_toggle() {
    let config = Config::builder()
        .dictionary(sample())
        .interpolate(false)
        .build();
    let data = data! { "name" => "Ada" };
    let request = Request::builder()
        .key("hello_name")
        .locale("en-GB")
        .data(&data)
        .build();
    assert_eq!(config.translate(&request).text, "Hello, {{ name }}!");
}

#[test]
fn custom_lookup_and_not_found_handler() {
    let config = Config::builder()
        .dictionary(sample())
        .lookup(Arc::new(
            |key: &str, locale: &str, dictionary: &Dictionary, _data: &Data| {
                dictionary
                    .get(key, locale)
                    .map(|text| format!("«{text}»"))
            },
        ))
        .not_found(Arc::new(|key: &str, _locale: Option<&str>| {
            Some(format!("MISSING({key})"))
        }))
        .build();

    let page = PageContext::default();
    assert_eq!(
        config.translate_key("hello", &data! {}, Some("es-ES"), &page),
        "«Hola»"
    );
    assert_eq!(
        config.translate_key("bye", &data! {}, Some("es-ES"), &page),
        "MISSING(bye)"
    );
}

#[test]
fn config_debug_hides_strategies() {
    let rendered = format!("{:?}", config());
    assert!(rendered.contains("custom_lookup: false"));
    assert!(rendered.contains("interpolate: true"));
}
