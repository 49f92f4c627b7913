//! Lexical analysis for grint
//!
//! Tokenizes comma-grouped integer input using logos.

use grint_syntax::Span;
use logos::Logos;

/// Grouped-integer tokens
///
/// There is deliberately no skip pattern: a value may contain nothing but
/// digit runs and commas, so whitespace and every other foreign character
/// must surface as `Error`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A maximal run of ASCII digits (one grouping segment)
    #[regex(r"[0-9]+")]
    Digits,

    /// The grouping delimiter between thousands-segments
    #[token(",")]
    Comma,

    /// Separates values in batch input
    #[token("\n")]
    #[token("\r\n")]
    Newline,

    /// End of input
    Eof,

    /// Lexer error
    Error,
}

/// Token with location information
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        match self.lexer.next() {
            Some(Ok(token)) => {
                let span = self.lexer.span();
                let text = self.input[span.clone()].to_string();
                SpannedToken {
                    token,
                    span: Span::new(span.start, span.end),
                    text,
                }
            }
            Some(Err(())) => {
                let span = self.lexer.span();
                let text = self.input[span.clone()].to_string();
                SpannedToken {
                    token: Token::Error,
                    span: Span::new(span.start, span.end),
                    text,
                }
            }
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: String::new(),
            },
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
