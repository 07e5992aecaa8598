//! AST types for translation templates.

/// A parsed translation template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// A template consisting of a single literal run.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Literal(text)]
        };
        Template { segments }
    }

    /// Placeholder paths in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &[String]> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(path) => Some(path.as_slice()),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output unchanged.
    Literal(String),

    /// A `{{ name }}` placeholder, stored as its dot-separated path.
    Placeholder(Vec<String>),
}
