//! Terminal output helpers.

mod diagnostic;
pub mod table;

pub use diagnostic::{print_translation_diagnostic, JsonDiagnostic};
