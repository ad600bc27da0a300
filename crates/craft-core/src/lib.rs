#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the Craft grammar engine.
//!
//! Two layers:
//! - **Rule layer** (`grammar`): the declarative rule set, in tree-sitter's `grammar.json` shape
//! - **Schema layer** (`node_types`): the node-type manifest derived from the rules, plus an
//!   indexed lookup table used by CST field access

pub mod grammar;
pub mod node_types;

pub use grammar::{Grammar, GrammarError, Rule};
pub use node_types::{FieldDescriptor, NodeShape, NodeTypeInfo, NodeTypeTable, TypeRef};
