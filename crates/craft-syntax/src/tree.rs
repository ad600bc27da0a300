//! Concrete syntax tree handed to consumers.
//!
//! [`SyntaxTree`] owns the source text, the green tree and the diagnostics of one
//! parse. [`Node`] is a borrowed view in tree-sitter's vocabulary: kinds are rule
//! names, children exclude whitespace and newlines, and field names come from the
//! node-type schema.

use std::ops::Range;
use std::sync::Arc;

use craft_core::NodeTypeTable;
use rowan::{NodeOrToken, TextRange};

use crate::diagnostics::Diagnostics;
use crate::parser::ast::SourceFile;
use crate::parser::{GreenTree, SyntaxElement, SyntaxKind, SyntaxNode};

/// Immutable result of one parse.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: String,
    green: GreenTree,
    diagnostics: Diagnostics,
    table: Arc<NodeTypeTable>,
}

impl SyntaxTree {
    pub(crate) fn new(
        source: String,
        green: GreenTree,
        diagnostics: Diagnostics,
        table: Arc<NodeTypeTable>,
    ) -> Self {
        Self {
            source,
            green,
            diagnostics,
            table,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.root().clone())
    }

    pub fn root_node(&self) -> Node<'_> {
        Node {
            element: NodeOrToken::Node(self.syntax()),
            tree: self,
        }
    }

    /// Typed view of the root.
    pub fn source_file(&self) -> SourceFile {
        SourceFile::cast(self.syntax()).expect("parser always produces SourceFile")
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Whether any error node or error token is present.
    ///
    /// The tree is authoritative; diagnostics only help locate the problems.
    pub fn has_errors(&self) -> bool {
        self.syntax()
            .descendants_with_tokens()
            .any(|element| element.kind().is_error())
    }

    pub fn node_types(&self) -> &NodeTypeTable {
        &self.table
    }
}

/// A node or named/anonymous leaf token of a [`SyntaxTree`].
#[derive(Debug, Clone)]
pub struct Node<'t> {
    element: SyntaxElement,
    tree: &'t SyntaxTree,
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element && std::ptr::eq(self.tree, other.tree)
    }
}

impl Eq for Node<'_> {}

impl<'t> Node<'t> {
    fn wrap(&self, element: SyntaxElement) -> Node<'t> {
        Node {
            element,
            tree: self.tree,
        }
    }

    pub fn syntax(&self) -> &SyntaxElement {
        &self.element
    }

    pub fn kind(&self) -> SyntaxKind {
        self.element.kind()
    }

    /// Rule name for named kinds, literal text for anonymous tokens.
    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is_named(&self) -> bool {
        self.kind().is_named()
    }

    pub fn is_error(&self) -> bool {
        self.kind().is_error()
    }

    /// Zero-width error node left where something required was absent.
    pub fn is_missing(&self) -> bool {
        self.kind() == SyntaxKind::Error && self.span().is_empty()
    }

    pub fn has_error(&self) -> bool {
        match &self.element {
            NodeOrToken::Node(node) => node
                .descendants_with_tokens()
                .any(|element| element.kind().is_error()),
            NodeOrToken::Token(token) => token.kind().is_error(),
        }
    }

    pub fn span(&self) -> TextRange {
        self.element.text_range()
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.span().into()
    }

    /// Source text covered by the node.
    pub fn text(&self) -> &'t str {
        &self.tree.source[self.byte_range()]
    }

    /// Children in source order, whitespace and newlines excluded.
    pub fn children(&self) -> Vec<Node<'t>> {
        match &self.element {
            NodeOrToken::Node(node) => node
                .children_with_tokens()
                .filter(|element| !element.kind().is_hidden())
                .map(|element| self.wrap(element))
                .collect(),
            NodeOrToken::Token(_) => Vec::new(),
        }
    }

    pub fn named_children(&self) -> Vec<Node<'t>> {
        self.children()
            .into_iter()
            .filter(Node::is_named)
            .collect()
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    pub fn named_child_count(&self) -> usize {
        self.named_children().len()
    }

    pub fn child(&self, index: usize) -> Option<Node<'t>> {
        self.children().into_iter().nth(index)
    }

    pub fn parent(&self) -> Option<Node<'t>> {
        self.element
            .parent()
            .map(|node| self.wrap(NodeOrToken::Node(node)))
    }

    /// Field of the parent this node fills, per the node-type schema.
    pub fn field_name(&self) -> Option<&'t str> {
        let parent = self.element.parent()?;
        self.tree
            .table
            .field_for_child(parent.kind().name(), self.kind_name(), self.is_named())
    }

    pub fn child_by_field_name(&self, field: &str) -> Option<Node<'t>> {
        self.children()
            .into_iter()
            .find(|child| child.field_name() == Some(field))
    }

    pub fn children_by_field_name(&self, field: &str) -> Vec<Node<'t>> {
        self.children()
            .into_iter()
            .filter(|child| child.field_name() == Some(field))
            .collect()
    }

    /// This node and everything below it in pre-order, whitespace and newlines excluded.
    pub fn descendants(&self) -> Vec<Node<'t>> {
        match &self.element {
            NodeOrToken::Node(node) => node
                .descendants_with_tokens()
                .filter(|element| !element.kind().is_hidden())
                .map(|element| self.wrap(element))
                .collect(),
            NodeOrToken::Token(_) => vec![self.clone()],
        }
    }
}
