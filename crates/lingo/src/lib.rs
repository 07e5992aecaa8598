pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod locale;
pub mod parser;
pub mod store;
pub mod types;

#[cfg(feature = "global-config")]
pub mod global;

pub use config::{Config, Request};
pub use dictionary::{Dictionary, Entry, Node, PageDictionary, Translations, merge};
pub use engine::{
    Diagnostic, DictionaryLookup, Lookup, NotFoundHandler, Options, Severity, Translation,
    interpolate, translate,
};
pub use error::LoadError;
pub use locale::{FallbackMap, LocaleStrategy, WILDCARD, resolve_locale};
pub use store::{ConfigStore, DictionarySupplier};
pub use types::{Data, PageContext, Value};

#[cfg(feature = "global-config")]
pub use global::{publish, snapshot, translate_key, with_config};

/// Creates a [`Data`] map from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans, strings, or nested `Data` directly.
///
/// # Example
///
/// ```
/// use lingo::{data, Value};
///
/// let d = data! { "count" => 3, "name" => "Ada" };
/// assert_eq!(d.len(), 2);
/// assert_eq!(d["count"].as_number(), Some(3));
/// assert_eq!(d["name"].as_string(), Some("Ada"));
/// ```
#[macro_export]
macro_rules! data {
    {} => {
        $crate::Data::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Data::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
