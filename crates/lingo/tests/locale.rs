//! Integration tests for locale resolution and fallback maps.

use lingo::{FallbackMap, LocaleStrategy, PageContext, resolve_locale};

// =========================================================================
// Override Precedence
// =========================================================================

#[test]
fn override_wins_over_page_url() {
    let page = PageContext::builder().url("/es-ES/about/").build();
    assert_eq!(
        resolve_locale(Some("fr-FR"), &page, LocaleStrategy::UrlSegment),
        Some("fr-FR")
    );
}

#[test]
fn empty_override_is_ignored() {
    let page = PageContext::builder().url("/es-ES/about/").build();
    assert_eq!(
        resolve_locale(Some(""), &page, LocaleStrategy::UrlSegment),
        Some("es-ES")
    );
}

#[test]
fn override_applies_without_page_signal() {
    let page = PageContext::default();
    assert_eq!(
        resolve_locale(Some("de-DE"), &page, LocaleStrategy::PageLang),
        Some("de-DE")
    );
}

// =========================================================================
// URL Segment Strategy
// =========================================================================

#[test]
fn url_first_segment_is_locale() {
    let page = PageContext::builder().url("/es-ES/about/").build();
    assert_eq!(
        resolve_locale(None, &page, LocaleStrategy::UrlSegment),
        Some("es-ES")
    );
}

#[test]
fn root_url_yields_no_locale() {
    let page = PageContext::builder().url("/").build();
    assert_eq!(resolve_locale(None, &page, LocaleStrategy::UrlSegment), None);
}

#[test]
fn relative_url_yields_no_locale() {
    let page = PageContext::builder().url("about").build();
    assert_eq!(resolve_locale(None, &page, LocaleStrategy::UrlSegment), None);
}

#[test]
fn missing_url_yields_no_locale() {
    let page = PageContext::builder().lang("en-GB").build();
    assert_eq!(resolve_locale(None, &page, LocaleStrategy::UrlSegment), None);
}

// =========================================================================
// File Path Stem Strategy
// =========================================================================

#[test]
fn file_path_stem_accepts_common_forms() {
    for (stem, expected) in [
        ("/en/index", "en"),
        ("/en-US/blog/post", "en-US"),
        ("/en_US/blog/post", "en_US"),
        ("fr/about", "fr"),
        ("/DE-de/about", "DE-de"),
        ("/es", "es"),
    ] {
        let page = PageContext::builder().file_path_stem(stem).build();
        assert_eq!(
            resolve_locale(None, &page, LocaleStrategy::FilePathStem),
            Some(expected),
            "stem {stem}"
        );
    }
}

#[test]
fn file_path_stem_rejects_non_locale_prefixes() {
    for stem in ["/e/index", "/en-U/index", "/en-US-x/index", "/42/index", "/en1/index", ""] {
        let page = PageContext::builder().file_path_stem(stem).build();
        assert_eq!(
            resolve_locale(None, &page, LocaleStrategy::FilePathStem),
            None,
            "stem {stem}"
        );
    }
}

#[test]
fn file_path_stem_strategy_ignores_url() {
    let page = PageContext::builder()
        .url("/es-ES/about/")
        .file_path_stem("/fr-FR/about")
        .build();
    assert_eq!(
        resolve_locale(None, &page, LocaleStrategy::FilePathStem),
        Some("fr-FR")
    );
}

// =========================================================================
// Page Lang Strategy
// =========================================================================

#[test]
fn page_lang_is_used_verbatim() {
    let page = PageContext::builder().lang("pt_BR.UTF-8").build();
    assert_eq!(
        resolve_locale(None, &page, LocaleStrategy::PageLang),
        Some("pt_BR.UTF-8")
    );
}

#[test]
fn empty_page_lang_is_unresolved() {
    let page = PageContext::builder().lang("").build();
    assert_eq!(resolve_locale(None, &page, LocaleStrategy::PageLang), None);
}

#[test]
fn page_context_deserializes_camel_case() {
    let page: PageContext =
        serde_json::from_str(r#"{"url": "/en/", "filePathStem": "/en/index"}"#).unwrap();
    assert_eq!(page.url(), Some("/en/"));
    assert_eq!(page.file_path_stem(), Some("/en/index"));
    assert_eq!(page.lang(), None);
}

#[test]
fn strategy_deserializes_kebab_case() {
    let strategy: LocaleStrategy = serde_json::from_str(r#""file-path-stem""#).unwrap();
    assert_eq!(strategy, LocaleStrategy::FilePathStem);
    assert_eq!(LocaleStrategy::default(), LocaleStrategy::UrlSegment);
}

// =========================================================================
// Fallback Map
// =========================================================================

#[test]
fn specific_fallback_wins_over_wildcard() {
    let fallbacks: FallbackMap = [("es-MX", "es-ES"), ("*", "en-GB")].into_iter().collect();
    assert_eq!(fallbacks.resolve(Some("es-MX")), Some("es-ES"));
}

#[test]
fn wildcard_applies_without_specific_entry() {
    let fallbacks: FallbackMap = [("*", "en-GB")].into_iter().collect();
    assert_eq!(fallbacks.resolve(Some("de-DE")), Some("en-GB"));
}

#[test]
fn wildcard_applies_to_unresolved_locale() {
    let fallbacks = FallbackMap::wildcard("en-GB");
    assert_eq!(fallbacks.resolve(None), Some("en-GB"));
}

#[test]
fn no_entry_and_no_wildcard_is_none() {
    let fallbacks: FallbackMap = [("es-MX", "es-ES")].into_iter().collect();
    assert_eq!(fallbacks.resolve(Some("de-DE")), None);
    assert!(FallbackMap::new().is_empty());
}

#[test]
fn fallback_resolution_is_single_hop() {
    let fallbacks: FallbackMap = [("es-MX", "es-ES"), ("es-ES", "en-GB")].into_iter().collect();
    assert_eq!(fallbacks.resolve(Some("es-MX")), Some("es-ES"));
}

#[test]
fn fallback_map_deserializes_wildcard() {
    let fallbacks: FallbackMap =
        serde_json::from_str(r#"{"*": "en-GB", "pt-BR": "pt-PT"}"#).unwrap();
    assert_eq!(fallbacks.resolve(Some("pt-BR")), Some("pt-PT"));
    assert_eq!(fallbacks.resolve(Some("it-IT")), Some("en-GB"));
}
