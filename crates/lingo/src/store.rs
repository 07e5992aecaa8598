//! Publishing configuration snapshots across rebuilds.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::{Arc, RwLock};

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::LoadError;

/// Produces a fresh base dictionary on every rebuild.
pub type DictionarySupplier = Arc<dyn Fn() -> Result<Dictionary, LoadError> + Send + Sync>;

/// Holds the current [`Config`] snapshot.
///
/// Readers take an `Arc` to the snapshot and keep using it for the whole
/// render pass; publishing replaces the reference and never edits a
/// snapshot in place, so in-flight renders keep a consistent view.
///
/// # Example
///
/// ```
/// use lingo::{Config, ConfigStore, Dictionary};
///
/// let store = ConfigStore::new(Config::default());
/// let before = store.snapshot();
///
/// let dictionary = Dictionary::from_json_str("<inline>", r#"{"hi": {"en": "Hi"}}"#).unwrap();
/// store.publish(before.with_dictionary(dictionary));
///
/// assert!(before.dictionary().is_empty());
/// assert_eq!(store.snapshot().dictionary().get("hi", "en"), Some("Hi"));
/// ```
pub struct ConfigStore {
    current: RwLock<Arc<Config>>,
    supplier: Option<DictionarySupplier>,
}

impl ConfigStore {
    /// A store holding a fixed configuration.
    pub fn new(config: Config) -> Self {
        ConfigStore {
            current: RwLock::new(Arc::new(config)),
            supplier: None,
        }
    }

    /// A store whose dictionary is re-read from `supplier` on every
    /// [`rebuild`](Self::rebuild). `template` supplies every other option.
    pub fn with_supplier(template: Config, supplier: DictionarySupplier) -> Result<Self, LoadError> {
        let dictionary = supplier()?;
        Ok(ConfigStore {
            current: RwLock::new(Arc::new(template.with_dictionary(dictionary))),
            supplier: Some(supplier),
        })
    }

    /// The configuration currently published.
    pub fn snapshot(&self) -> Arc<Config> {
        let guard = self.current.read().expect("config store lock poisoned");
        Arc::clone(&guard)
    }

    /// Replace the published configuration.
    pub fn publish(&self, config: Config) {
        let next = Arc::new(config);
        let mut guard = self.current.write().expect("config store lock poisoned");
        *guard = next;
    }

    /// Re-run the dictionary supplier and publish the result.
    ///
    /// Without a supplier this is a no-op. If the supplier fails, the
    /// previous snapshot stays published and the error is returned. The
    /// new dictionary is combined with whatever configuration is published
    /// once the supplier returns, so a concurrent [`publish`](Self::publish)
    /// keeps its other options.
    pub fn rebuild(&self) -> Result<(), LoadError> {
        let Some(supplier) = &self.supplier else {
            return Ok(());
        };
        let dictionary = supplier()?;
        let mut guard = self.current.write().expect("config store lock poisoned");
        let next = guard.with_dictionary(dictionary);
        tracing::debug!(keys = next.dictionary().len(), "publishing rebuilt dictionary");
        *guard = Arc::new(next);
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        ConfigStore::new(Config::default())
    }
}

impl Debug for ConfigStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ConfigStore")
            .field("current", &self.snapshot())
            .field("has_supplier", &self.supplier.is_some())
            .finish()
    }
}
