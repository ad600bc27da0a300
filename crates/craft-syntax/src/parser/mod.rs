//! Parser infrastructure for the Craft language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) as a Rowan green tree.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: horizontal whitespace and comments are collected, then attached to
//!   the enclosing node. Newlines are statement separators and always parsed explicitly
//! - Checkpoint-based wrapping: a component becomes a `component_flow` once a `>` follows
//! - Contextual keywords: keywords in name position are recorded as `Id`
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree and never fails.
//!
//! 1. Missing expected tokens emit a diagnostic and leave a zero-width `Error` node
//! 2. Unexpected tokens are wrapped in an `Error` node up to the next newline outside
//!    nested braces, or the `}` closing the current block
//! 3. A block left open at end of input is reported against its opening brace

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod green;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{CraftLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenCategory};
pub use green::GreenTree;
pub use lexer::{Token, Tokens, lex, tokenize};

use self::core::Parser;

use crate::diagnostics::Diagnostics;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: GreenTree,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        self.cst.root()
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.root().clone())
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (GreenTree, Diagnostics) {
        (self.cst, self.diagnostics)
    }
}

/// Main entry point. Never fails: malformed input yields `Error` nodes.
pub fn parse(source: &str) -> Parse {
    let mut parser = Parser::new(source, lex(source));
    parser.parse_root();
    let (cst, diagnostics) = parser.finish();
    Parse { cst, diagnostics }
}
