//! Lexer for the Craft language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! Two views over the same Logos lexer:
//! - [`tokenize`]: the public, lazy token stream. Horizontal whitespace is dropped.
//! - [`lex`]: the lossless stream the parser consumes. Concatenating token texts gives
//!   back the input, so tree ranges are exact byte offsets.
//!
//! ## Error handling
//!
//! Unmatched input becomes `Garbage` tokens, one per character. Unterminated strings and
//! block comments are single error tokens that run to the end of input.

use std::ops::Range;

use logos::Logos;
use rowan::TextRange;

use super::cst::{SyntaxKind, TokenCategory};

/// Zero-copy token: kind + span, text retrieved via [`Token::text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    /// O(1) slice into the source the token was produced from.
    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[Range::<usize>::from(self.span)]
    }

    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Lazy token stream. Cloning yields an independent cursor at the same position,
/// so a stream can be restarted or forked without re-lexing what came before.
#[derive(Clone)]
pub struct Tokens<'src> {
    lexer: logos::Lexer<'src, SyntaxKind>,
    /// Remaining bytes of an unmatched run, emitted one character at a time.
    garbage: Range<usize>,
    keep_whitespace: bool,
}

impl<'src> Tokens<'src> {
    fn new(source: &'src str, keep_whitespace: bool) -> Self {
        Self {
            lexer: SyntaxKind::lexer(source),
            garbage: 0..0,
            keep_whitespace,
        }
    }

    fn next_garbage(&mut self) -> Option<Token> {
        if self.garbage.is_empty() {
            return None;
        }
        let rest = &self.lexer.source()[self.garbage.clone()];
        let len = rest.chars().next().map_or(1, char::len_utf8);
        let start = self.garbage.start;
        self.garbage.start += len;
        Some(Token::new(
            SyntaxKind::Garbage,
            range_to_text_range(start..start + len),
        ))
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.next_garbage() {
                return Some(token);
            }
            match self.lexer.next()? {
                Ok(SyntaxKind::Whitespace) if !self.keep_whitespace => continue,
                Ok(kind) => return Some(Token::new(kind, range_to_text_range(self.lexer.span()))),
                Err(()) => self.garbage = self.lexer.span(),
            }
        }
    }
}

/// Tokenizes source lazily, dropping horizontal whitespace.
///
/// Re-tokenizing the same text yields an identical stream.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(source, false)
}

/// Tokenizes source into a lossless vector of span-based tokens (whitespace included).
pub fn lex(source: &str) -> Vec<Token> {
    Tokens::new(source, true).collect()
}
