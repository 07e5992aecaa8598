//! Parsers for translation templates and locale tags.

pub mod ast;
mod locale_tag;
mod template;

pub use ast::{Segment, Template};
pub use locale_tag::parse_locale_prefix;
pub use template::parse_template;
