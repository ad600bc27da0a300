//! Grammar rule model.
//!
//! Rules are plain data mirroring tree-sitter's `grammar.json`: combinators
//! (`seq`, `choice`, `repeat`, ...) over literals, patterns and symbol references.
//! The builder functions in [`dsl`] keep rule definitions close to how they read in
//! a `grammar.js` file.

pub mod dsl;
mod json;
mod types;


pub use types::{Grammar, GrammarError, Rule};
