//! Parser for locale-looking path prefixes such as `en`, `en-US` or `en_US`.

use winnow::combinator::{alt, eof, opt, peek, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Match a locale tag at the start of a path.
///
/// The tag is a primary subtag of two or more ASCII letters, optionally
/// followed by `-` or `_` and a second subtag of two or more letters. It
/// may be preceded by a single `/` and must end at a `/` or at the end of
/// input. The match is returned verbatim, without case normalization.
pub fn parse_locale_prefix(input: &str) -> Option<&str> {
    let mut remaining = input;
    locale_prefix(&mut remaining).ok()
}

fn locale_prefix<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    opt('/').void().parse_next(input)?;
    terminated(
        (subtag, opt((one_of(['-', '_']), subtag))).take(),
        peek(alt((eof.void(), '/'.void()))),
    )
    .parse_next(input)
}

fn subtag<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(2.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}
