//! Integration tests for publishing and rebuilding configuration snapshots.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::{env, fs, thread};

use lingo::{
    Config, ConfigStore, Dictionary, DictionarySupplier, FallbackMap, LoadError, PageContext, data,
};
use tempfile::NamedTempFile;

fn file_supplier(path: PathBuf) -> DictionarySupplier {
    Arc::new(move || {
        let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        Dictionary::from_json_str(&path.display().to_string(), &content)
    })
}

// =========================================================================
// Publish
// =========================================================================

#[test]
fn publish_replaces_snapshot_without_touching_readers() {
    let store = ConfigStore::default();
    let before = store.snapshot();

    let mut dictionary = Dictionary::new();
    dictionary.insert("hi", "en", "Hi");
    store.publish(before.with_dictionary(dictionary));

    assert!(before.dictionary().is_empty());
    assert_eq!(store.snapshot().dictionary().get("hi", "en"), Some("Hi"));
}

#[test]
fn rebuild_without_supplier_is_noop() {
    let store = ConfigStore::new(Config::default());
    store.rebuild().unwrap();
    assert!(store.snapshot().dictionary().is_empty());
}

// =========================================================================
// Rebuild
// =========================================================================

#[test]
fn rebuild_rereads_supplier() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), r#"{"hello": {"en-GB": "Hello"}}"#).unwrap();

    let template = Config::builder()
        .fallbacks(FallbackMap::wildcard("en-GB"))
        .build();
    let store = ConfigStore::with_supplier(template, file_supplier(file.path().to_path_buf()))
        .unwrap();
    let page = PageContext::default();
    assert_eq!(
        store.snapshot().translate_key("hello", &data! {}, Some("en-GB"), &page),
        "Hello"
    );

    fs::write(file.path(), r#"{"hello": {"en-GB": "Hiya"}}"#).unwrap();
    store.rebuild().unwrap();

    let rebuilt = store.snapshot();
    assert_eq!(rebuilt.translate_key("hello", &data! {}, Some("de-DE"), &page), "Hiya");
    assert_eq!(rebuilt.fallbacks().resolve(Some("de-DE")), Some("en-GB"));
}

#[test]
fn failed_rebuild_keeps_previous_snapshot() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), r#"{"hello": {"en": "Hello"}}"#).unwrap();
    let store =
        ConfigStore::with_supplier(Config::default(), file_supplier(file.path().to_path_buf()))
            .unwrap();

    fs::write(file.path(), "{ not json").unwrap();
    let err = store.rebuild().unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert_eq!(store.snapshot().dictionary().get("hello", "en"), Some("Hello"));
}

#[test]
fn rebuild_keeps_options_published_after_store_creation() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), r#"{"hello": {"en": "Hello"}}"#).unwrap();
    let store =
        ConfigStore::with_supplier(Config::default(), file_supplier(file.path().to_path_buf()))
            .unwrap();

    store.publish(
        Config::builder()
            .fallbacks(FallbackMap::wildcard("en"))
            .build(),
    );

    fs::write(file.path(), r#"{"hello": {"en": "Hiya"}}"#).unwrap();
    store.rebuild().unwrap();

    let rebuilt = store.snapshot();
    assert_eq!(rebuilt.fallbacks().resolve(Some("fr")), Some("en"));
    assert_eq!(rebuilt.dictionary().get("hello", "en"), Some("Hiya"));
}

#[test]
fn publish_during_supplier_run_survives_rebuild() {
    let armed = Arc::new(AtomicBool::new(false));
    let started = Arc::new(Barrier::new(2));
    let resume = Arc::new(Barrier::new(2));

    let supplier: DictionarySupplier = {
        let (armed, started, resume) = (armed.clone(), started.clone(), resume.clone());
        Arc::new(move || {
            if armed.load(Ordering::SeqCst) {
                started.wait();
                resume.wait();
            }
            Dictionary::from_json_str("<inline>", r#"{"hello": {"en": "Hiya"}}"#)
        })
    };
    let store = ConfigStore::with_supplier(Config::default(), supplier).unwrap();
    armed.store(true, Ordering::SeqCst);

    thread::scope(|scope| {
        let rebuild = scope.spawn(|| store.rebuild());
        started.wait();
        store.publish(
            Config::builder()
                .fallbacks(FallbackMap::wildcard("en"))
                .build(),
        );
        resume.wait();
        rebuild.join().unwrap().unwrap();
    });

    let rebuilt = store.snapshot();
    assert_eq!(rebuilt.fallbacks().resolve(Some("fr")), Some("en"));
    assert_eq!(rebuilt.dictionary().get("hello", "en"), Some("Hiya"));
}

#[test]
fn initial_supplier_failure_is_reported() {
    let missing = env::temp_dir().join("lingo-definitely-missing.json");
    let err = ConfigStore::with_supplier(Config::default(), file_supplier(missing)).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

// =========================================================================
// Concurrency
// =========================================================================

#[test]
fn concurrent_readers_see_whole_snapshots() {
    let store = Arc::new(ConfigStore::default());
    let mut first = Dictionary::new();
    first.insert("a", "en", "1");
    first.insert("b", "en", "1");
    store.publish(Config::builder().dictionary(first).build());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = store.snapshot();
                    let page = PageContext::default();
                    let a = snapshot.translate_key("a", &data! {}, Some("en"), &page);
                    let b = snapshot.translate_key("b", &data! {}, Some("en"), &page);
                    assert_eq!(a, b);
                }
            })
        })
        .collect();

    for version in 2..50 {
        let mut next = Dictionary::new();
        next.insert("a", "en", version.to_string());
        next.insert("b", "en", version.to_string());
        store.publish(Config::builder().dictionary(next).build());
    }

    for reader in readers {
        reader.join().unwrap();
    }
}
