//! Diagnostics produced while resolving a translation.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Placeholder shown for a locale that could not be resolved.
const UNRESOLVED: &str = "<unresolved>";

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A fallback translation was substituted.
    Warn,
    /// Nothing was found; the raw key was rendered.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A translation miss, reported alongside the rendered text.
///
/// Misses never abort a render; the caller decides whether and how to
/// surface these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The preferred locale missed and a fallback locale was used.
    #[error(
        "could not find '{key}' in '{}'. Using '{fallback_locale}' fallback.",
        .locale.as_deref().unwrap_or(UNRESOLVED)
    )]
    FallbackUsed {
        key: String,
        locale: Option<String>,
        fallback_locale: String,
    },

    /// Neither the preferred nor the fallback locale had a translation.
    #[error("{}", missing_message(.key, .locale.as_deref(), .fallback_locale.as_deref()))]
    Missing {
        key: String,
        locale: Option<String>,
        fallback_locale: Option<String>,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::FallbackUsed { .. } => Severity::Warn,
            Diagnostic::Missing { .. } => Severity::Error,
        }
    }

    /// The key that missed.
    pub fn key(&self) -> &str {
        match self {
            Diagnostic::FallbackUsed { key, .. } | Diagnostic::Missing { key, .. } => key,
        }
    }

    /// The preferred locale, if one was resolved.
    pub fn locale(&self) -> Option<&str> {
        match self {
            Diagnostic::FallbackUsed { locale, .. } | Diagnostic::Missing { locale, .. } => {
                locale.as_deref()
            }
        }
    }

    /// The fallback locale that was tried, if any.
    pub fn fallback_locale(&self) -> Option<&str> {
        match self {
            Diagnostic::FallbackUsed {
                fallback_locale, ..
            } => Some(fallback_locale),
            Diagnostic::Missing {
                fallback_locale, ..
            } => fallback_locale.as_deref(),
        }
    }

    /// Report this diagnostic through `tracing` at its severity.
    pub fn emit(&self) {
        let key = self.key();
        let locale = self.locale();
        let fallback_locale = self.fallback_locale();
        match self.severity() {
            Severity::Warn => {
                tracing::warn!(target: "lingo", key, ?locale, ?fallback_locale, "{self}");
            }
            Severity::Error => {
                tracing::error!(target: "lingo", key, ?locale, ?fallback_locale, "{self}");
            }
        }
    }
}

fn missing_message(key: &str, locale: Option<&str>, fallback_locale: Option<&str>) -> String {
    let locale = locale.unwrap_or(UNRESOLVED);
    match fallback_locale {
        Some(fallback) => format!(
            "translation for '{key}' in '{locale}' not found. Fallback '{fallback}' is missing too."
        ),
        None => format!(
            "translation for '{key}' in '{locale}' not found. No fallback locale specified."
        ),
    }
}
