//! CLI command implementations.

mod coverage;
mod translate;

pub use coverage::{run_coverage, CoverageArgs};
pub use translate::{run_translate, TranslateArgs};
