//! The grammar engine: compiled rule set, node-type schema and parse entry points.

use std::sync::{Arc, OnceLock};

use craft_core::node_types::{self, NodeTypeInfo, NodeTypeTable};
use craft_core::Grammar;
use serde::Serialize;

use crate::parser::parse;
use crate::rules::craft_grammar;
use crate::tree::SyntaxTree;
use crate::Result;

/// Tree-sitter ABI version the node-type manifest targets.
pub const LANGUAGE_VERSION: u32 = 14;

/// Summary of the compiled rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub name: String,
    pub version: u32,
    pub field_count: usize,
    /// Rule positions across all rule bodies.
    pub state_count: usize,
    /// Declared field names, sorted.
    pub fields: Vec<String>,
}

/// Rule set plus everything derived from it. Built once, shared by all parses.
#[derive(Debug)]
pub struct GrammarEngine {
    grammar: Grammar,
    node_types: Vec<NodeTypeInfo>,
    table: Arc<NodeTypeTable>,
    metadata: Metadata,
}

impl GrammarEngine {
    /// Validates the Craft rule set and derives its node-type schema.
    pub fn compile() -> Result<Self> {
        let grammar = craft_grammar();
        grammar.validate()?;

        let node_types = node_types::generate(&grammar);
        let table = Arc::new(NodeTypeTable::new(&node_types));
        let fields: Vec<String> = grammar
            .field_names()
            .into_iter()
            .map(str::to_owned)
            .collect();
        let metadata = Metadata {
            name: grammar.name.clone(),
            version: LANGUAGE_VERSION,
            field_count: fields.len(),
            state_count: grammar.position_count(),
            fields,
        };

        tracing::debug!(
            rules = grammar.rules.len(),
            node_types = node_types.len(),
            fields = metadata.field_count,
            "compiled grammar"
        );

        Ok(Self {
            grammar,
            node_types,
            table,
            metadata,
        })
    }

    /// Parses source text. Never fails: malformed input yields `ERROR` nodes.
    pub fn parse(&self, source: &str) -> SyntaxTree {
        let (green, diagnostics) = parse(source).into_parts();
        tracing::debug!(
            bytes = source.len(),
            errors = diagnostics.len(),
            "parsed source"
        );
        SyntaxTree::new(
            source.to_owned(),
            green,
            diagnostics,
            Arc::clone(&self.table),
        )
    }

    /// Parses raw bytes; invalid UTF-8 sequences become U+FFFD and lex as errors.
    pub fn parse_bytes(&self, source: &[u8]) -> SyntaxTree {
        self.parse(&String::from_utf8_lossy(source))
    }

    /// Node-type manifest, one entry per visible rule in definition order.
    pub fn schema(&self) -> &[NodeTypeInfo] {
        &self.node_types
    }

    /// Manifest in `node-types.json` wire shape.
    pub fn node_types_json(&self) -> String {
        node_types::to_json(&self.node_types)
    }

    pub fn node_type_table(&self) -> &NodeTypeTable {
        &self.table
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// The process-wide engine, compiled on first use.
pub fn compile_grammar() -> &'static GrammarEngine {
    static ENGINE: OnceLock<GrammarEngine> = OnceLock::new();
    ENGINE.get_or_init(|| GrammarEngine::compile().expect("built-in Craft rule set is valid"))
}
