//! Template string parser using winnow.
//!
//! Recognizes `{{ name }}` placeholders (one line, name trimmed, dot-paths
//! allowed). Everything else, including stray braces, is literal text, so
//! parsing never fails.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{take_till, take_until};

use super::ast::{Segment, Template};

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        _ => Template::literal(input),
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder, literal run, or lone brace).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_run, open_brace)).parse_next(input)
}

/// Parse a placeholder: {{ path }}
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited(
        "{{",
        take_until(0.., "}}").verify(|name: &str| !name.contains('\n')),
        "}}",
    )
    .map(|name: &str| Segment::Placeholder(placeholder_path(name)))
    .parse_next(input)
}

/// Parse a run of text up to the next brace.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., '{')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// A `{` that does not open a placeholder.
fn open_brace(input: &mut &str) -> ModalResult<Segment> {
    '{'.value(Segment::Literal("{".to_string()))
        .parse_next(input)
}

fn placeholder_path(name: &str) -> Vec<String> {
    name.trim().split('.').map(str::to_string).collect()
}
