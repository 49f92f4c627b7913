//! Parser for comma-grouped decimal integers
//!
//! Validates thousands-grouping structure over the logos token stream and
//! folds the digits into a value.

use grint_lexer::{Lexer, SpannedToken, Token};
use grint_syntax::{GrintError, SourceMap, Span, Spanned};

// Segment splitting and width rules
pub mod groups;

use groups::GroupingViolation;

/// Parse a comma-grouped integer string into its value
///
/// This is the contract-bearing entry point: any malformed input — a
/// segment wider than three digits, a non-first segment that is not
/// exactly three digits, a character outside `0-9` and the comma, an
/// empty string, or a value that does not fit in `u64` — yields `None`.
/// Nothing on this path panics or returns an error.
#[must_use]
pub fn parse_grouped(input: &str) -> Option<u64> {
    let parser = Parser::new(input).ok()?;
    parser.parse_value().ok()
}

pub struct Parser {
    input: String,
    source_map: SourceMap,
    filename: String,
    tokens: Vec<SpannedToken>,
}

impl Parser {
    /// Create a new parser for the given input
    ///
    /// # Errors
    ///
    /// Returns `GrintError` if there are lexical errors in the input
    pub fn new(input: &str) -> Result<Self, GrintError> {
        Self::new_with_filename(input, "<input>")
    }

    /// Create a new parser for the given input with a filename
    ///
    /// # Errors
    ///
    /// Returns `GrintError` if there are lexical errors in the input
    pub fn new_with_filename(input: &str, filename: &str) -> Result<Self, GrintError> {
        let source_map = SourceMap::new(input);

        // Tokenize input using logos
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize();

        // Check for lexer errors
        for token in &tokens {
            if token.token == Token::Error {
                return Err(GrintError::syntax(
                    format!("unexpected character: {:?}", token.text),
                    token.span,
                    &source_map,
                    filename,
                ));
            }
        }

        Ok(Self {
            input: input.to_string(),
            source_map,
            filename: filename.to_string(),
            tokens,
        })
    }

    /// Parse the input as exactly one grouped value
    ///
    /// The whole input must be a single candidate value: a line break
    /// anywhere makes it malformed, as does an empty input.
    ///
    /// # Errors
    ///
    /// Returns `GrintError` describing the first violation: `Syntax` for
    /// empty or newline-bearing input, `Grouping` for segment width
    /// violations, `Range` for values beyond `u64`.
    pub fn parse_value(&self) -> Result<u64, GrintError> {
        for token in &self.tokens {
            if token.token == Token::Newline {
                return Err(GrintError::syntax(
                    "unexpected line break in value".to_string(),
                    token.span,
                    &self.source_map,
                    &self.filename,
                ));
            }
        }

        let tokens: Vec<SpannedToken> = self
            .tokens
            .iter()
            .filter(|token| token.token != Token::Eof)
            .cloned()
            .collect();

        self.value_from_tokens(&tokens)
    }

    /// Parse the input as newline-separated grouped values
    ///
    /// Blank lines are skipped; an empty input yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `GrintError` for the first malformed line, positioned at
    /// that line's offending span.
    pub fn parse(&self) -> Result<Vec<Spanned<u64>>, GrintError> {
        let mut values = Vec::new();
        let mut line: Vec<SpannedToken> = Vec::new();

        for token in &self.tokens {
            match token.token {
                Token::Newline | Token::Eof => {
                    if !line.is_empty() {
                        let span = tokens_span(&line);
                        let value = self.value_from_tokens(&line)?;
                        values.push(Spanned::new(value, span));
                        line.clear();
                    }
                }
                _ => line.push(token.clone()),
            }
        }

        Ok(values)
    }

    /// Run one value's tokens through the grouping and digit stages
    fn value_from_tokens(&self, tokens: &[SpannedToken]) -> Result<u64, GrintError> {
        let segments = groups::split_segments(tokens);

        if let Err(violation) = groups::validate_segments(&segments) {
            let (message, span) = match violation {
                GroupingViolation::TooLong { segment, span } => (
                    format!(
                        "segment '{segment}' is longer than {} digits",
                        groups::GROUP_WIDTH
                    ),
                    span,
                ),
                GroupingViolation::NotGroupWidth { segment, span } => (
                    format!(
                        "segment '{segment}' must be exactly {} digits",
                        groups::GROUP_WIDTH
                    ),
                    span,
                ),
            };
            return Err(GrintError::grouping(
                message,
                span,
                &self.source_map,
                &self.filename,
            ));
        }

        let digits = groups::concat_digits(&segments);
        let span = tokens_span(tokens);

        if !groups::is_digit_run(&digits) {
            return Err(GrintError::syntax(
                "expected at least one digit".to_string(),
                span,
                &self.source_map,
                &self.filename,
            ));
        }

        groups::fold_digits(&digits)
            .ok_or_else(|| GrintError::range(digits, span, &self.source_map, &self.filename))
    }

    /// Get access to the source map for error reporting
    #[must_use]
    pub const fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    /// Get access to the filename
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get access to the original input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get access to the tokens (useful for debugging)
    #[must_use]
    pub fn tokens(&self) -> &[SpannedToken] {
        &self.tokens
    }
}

fn tokens_span(tokens: &[SpannedToken]) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
        _ => Span::new(0, 0),
    }
}
