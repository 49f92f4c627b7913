//! Grouping-structure validation for the grint parser
//!
//! Centralized handling of segment splitting, width rules, and digit
//! folding shared by the single-value and batch parse paths.

use grint_lexer::{SpannedToken, Token};
use grint_syntax::Span;

/// Width of every thousands-segment after the first
pub const GROUP_WIDTH: usize = 3;

/// One comma-delimited run of digits with its source span
///
/// Segments may be empty: two adjacent commas, or a comma at a string
/// boundary, produce a zero-width segment at the boundary position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub span: Span,
}

/// A violation of the segment width rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupingViolation {
    /// Segment longer than `GROUP_WIDTH` digits
    TooLong { segment: String, span: Span },
    /// Non-first segment whose width is not exactly `GROUP_WIDTH`
    NotGroupWidth { segment: String, span: Span },
}

/// Split a value's token run on commas into an ordered segment list
///
/// Splitting on `n` commas always yields `n + 1` segments, mirroring how
/// the input text splits on the delimiter. Tokens other than `Digits` and
/// `Comma` are ignored; the caller filters the stream first.
#[must_use]
pub fn split_segments(tokens: &[SpannedToken]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut span = Span::new(0, 0);
    let mut anchored = false;

    for token in tokens {
        match token.token {
            Token::Digits => {
                if !anchored {
                    span = Span::new(token.span.start, token.span.end);
                    anchored = true;
                }
                span.end = token.span.end;
                text.push_str(&token.text);
            }
            Token::Comma => {
                if !anchored {
                    span = Span::new(token.span.start, token.span.start);
                }
                segments.push(Segment {
                    text: std::mem::take(&mut text),
                    span,
                });
                span = Span::new(token.span.end, token.span.end);
                anchored = true;
            }
            _ => {}
        }
    }

    if !anchored {
        let pos = tokens.last().map_or(0, |token| token.span.end);
        span = Span::new(pos, pos);
    }
    segments.push(Segment { text, span });
    segments
}

/// Check the thousands-grouping width rules over a segment list
///
/// Every segment must be at most `GROUP_WIDTH` wide; every segment after
/// the first must be exactly `GROUP_WIDTH` wide. The first segment may be
/// narrower, including empty: an empty leading segment violates neither
/// rule and is decided later by the digit check.
pub fn validate_segments(segments: &[Segment]) -> Result<(), GroupingViolation> {
    for (index, segment) in segments.iter().enumerate() {
        if segment.text.len() > GROUP_WIDTH {
            return Err(GroupingViolation::TooLong {
                segment: segment.text.clone(),
                span: segment.span,
            });
        }
        if index != 0 && segment.text.len() != GROUP_WIDTH {
            return Err(GroupingViolation::NotGroupWidth {
                segment: segment.text.clone(),
                span: segment.span,
            });
        }
    }
    Ok(())
}

/// Join a segment list back into a bare digit string
#[must_use]
pub fn concat_digits(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect()
}

/// Check that a string is a non-empty run of ASCII digits
///
/// The lexer already guarantees this for `Digits` tokens; the parser
/// re-checks the joined string before folding so nothing but `0-9` can
/// ever reach the numeric stage.
#[must_use]
pub fn is_digit_run(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// Fold a digit string into a value, `None` on overflow or non-digits
#[must_use]
pub fn fold_digits(digits: &str) -> Option<u64> {
    if !is_digit_run(digits) {
        return None;
    }
    let mut value: u64 = 0;
    for byte in digits.bytes() {
        let digit = u64::from(byte - b'0');
        value = value.checked_mul(10)?.checked_add(digit)?;
    }
    Some(value)
}
