//! Craft: parser for an architecture-description language.
//!
//! # Example
//!
//! ```
//! use craft_syntax::{TreePrinter, compile_grammar};
//!
//! let engine = compile_grammar();
//! let tree = engine.parse("actors {\n  user Customer\n}\n");
//! assert!(!tree.has_errors());
//! println!("{}", TreePrinter::new(&tree).dump());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod engine;
pub mod parser;
pub mod printer;
pub mod rules;
pub mod tree;


pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, RelatedInfo, line_col};
pub use engine::{GrammarEngine, LANGUAGE_VERSION, Metadata, compile_grammar};
pub use parser::{SyntaxKind, Token, TokenCategory, tokenize};
pub use printer::TreePrinter;
pub use tree::{Node, SyntaxTree};

/// Errors raised while building a grammar engine.
///
/// Parsing never fails; these only arise from an invalid rule set.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid grammar: {0}")]
    Grammar(#[from] craft_core::GrammarError),
}

pub type Result<T> = std::result::Result<T, Error>;
