//! Placeholder substitution.

use crate::parser::{Segment, Template, parse_template};
use crate::types::{Data, Value};

impl Template {
    /// Substitute `data` into this template.
    ///
    /// A placeholder whose path does not resolve renders as empty text.
    pub fn render(&self, data: &Data) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(path) => {
                    if let Some(value) = Value::lookup(data, path.as_slice()) {
                        out.push_str(&value.to_string());
                    }
                }
            }
        }
        out
    }
}

/// Parse `template` and substitute `data` into it.
///
/// # Example
///
/// ```
/// use lingo::{data, interpolate};
///
/// let greeting = interpolate("Hello, {{ name }}!", &data! { "name" => "Ada" });
/// assert_eq!(greeting, "Hello, Ada!");
/// assert_eq!(interpolate("Hello, {{ name }}!", &data! {}), "Hello, !");
/// ```
pub fn interpolate(template: &str, data: &Data) -> String {
    parse_template(template).render(data)
}
