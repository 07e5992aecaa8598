//! Global configuration storage for the `global-config` feature.
//!
//! Provides a process-wide [`ConfigStore`], removing the need to pass a
//! `&Config` through every template helper.

use std::sync::{Arc, LazyLock};

use crate::{Config, ConfigStore, Data, PageContext};

static GLOBAL_CONFIG: LazyLock<ConfigStore> = LazyLock::new(ConfigStore::default);

/// Runs `f` against the current global configuration snapshot.
pub fn with_config<T>(f: impl FnOnce(&Config) -> T) -> T {
    let config = GLOBAL_CONFIG.snapshot();
    f(config.as_ref())
}

/// Replaces the global configuration.
pub fn publish(config: Config) {
    GLOBAL_CONFIG.publish(config);
}

/// Returns the current global configuration snapshot.
pub fn snapshot() -> Arc<Config> {
    GLOBAL_CONFIG.snapshot()
}

/// Translates `key` with the global configuration.
pub fn translate_key(
    key: &str,
    data: &Data,
    locale_override: Option<&str>,
    page: &PageContext,
) -> String {
    with_config(|config| config.translate_key(key, data, locale_override, page))
}
