//! Miette diagnostics for dictionary files and colored translation warnings.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use lingo::{Diagnostic as TranslationDiagnostic, LoadError, Severity};
use miette::{Diagnostic, NamedSource, SourceSpan};
use owo_colors::{OwoColorize, Stream};
use thiserror::Error;

/// A miette-compatible diagnostic for JSON syntax errors in dictionary files.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid JSON: {message}")]
#[diagnostic(code(lingo::json))]
pub struct JsonDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl JsonDiagnostic {
    /// Create a diagnostic from a LoadError with source context.
    ///
    /// Returns `None` for errors that carry no source location.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Option<Self> {
        let LoadError::Parse {
            line,
            column,
            message,
            ..
        } = err
        else {
            return None;
        };

        let offset = byte_offset(content, *line, *column);

        Some(JsonDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: message.clone(),
            help: Some("dictionaries map keys to { \"<locale>\": \"<text>\" } objects".into()),
        })
    }
}

/// Convert a 1-based line and column into a byte offset into `content`.
///
/// Line lengths include their terminator, so `\r\n` files line up. The
/// result is clamped to the content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}

/// Print a translation diagnostic to stderr, yellow for fallbacks and red
/// for misses.
pub fn print_translation_diagnostic(diagnostic: &TranslationDiagnostic) {
    let line = format!("[i18n] {diagnostic}");
    match diagnostic.severity() {
        Severity::Warn => {
            eprintln!("{}", line.if_supports_color(Stream::Stderr, |t| t.yellow()));
        }
        Severity::Error => {
            eprintln!("{}", line.if_supports_color(Stream::Stderr, |t| t.red()));
        }
    }
}
