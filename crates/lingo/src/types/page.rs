use bon::Builder;
use serde::Deserialize;

/// Metadata about the page being rendered.
///
/// Only used to infer a locale; never mutated.
///
/// # Example
///
/// ```
/// use lingo::PageContext;
///
/// let page = PageContext::builder().url("/es-ES/about/").build();
/// assert_eq!(page.url(), Some("/es-ES/about/"));
/// assert_eq!(page.lang(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageContext {
    /// Public URL of the page, e.g. `/en-GB/about/`.
    #[builder(into)]
    url: Option<String>,

    /// Input file path without extension, e.g. `/en-GB/about`.
    #[builder(into)]
    file_path_stem: Option<String>,

    /// Explicit page language attribute, used verbatim.
    #[builder(into)]
    lang: Option<String>,
}

impl PageContext {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn file_path_stem(&self) -> Option<&str> {
        self.file_path_stem.as_deref()
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}
