//! Green tree construction and teardown.
//!
//! Arch and scenario continuations nest one level per line, so trees can be as deep
//! as the input is long. Nothing here recurses over depth: the builder keeps open
//! nodes on an explicit stack and skips rowan's node cache, whose rehashing walks
//! whole subtrees, and [`GreenTree`] releases its nodes one level at a time.

use rowan::{GreenNode, GreenToken, NodeOrToken, SyntaxKind as RawKind};

/// Position in the builder's child list where a node may later be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Bottom-up green tree builder with the same protocol as `rowan::GreenNodeBuilder`.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    parents: Vec<(RawKind, usize)>,
    children: Vec<NodeOrToken<GreenNode, GreenToken>>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&mut self, kind: RawKind, text: &str) {
        self.children
            .push(NodeOrToken::Token(GreenToken::new(kind, text)));
    }

    pub fn start_node(&mut self, kind: RawKind) {
        self.parents.push((kind, self.children.len()));
    }

    pub fn finish_node(&mut self) {
        let (kind, first) = self
            .parents
            .pop()
            .expect("finish_node without matching start_node");
        let node = GreenNode::new(kind, self.children.drain(first..));
        self.children.push(NodeOrToken::Node(node));
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.children.len())
    }

    /// Opens a node that adopts every child added since `checkpoint`.
    pub fn start_node_at(&mut self, checkpoint: Checkpoint, kind: RawKind) {
        let Checkpoint(at) = checkpoint;
        assert!(
            at <= self.children.len(),
            "checkpoint no longer valid, was finish_node called early?"
        );
        if let Some(&(_, first)) = self.parents.last() {
            assert!(
                at >= first,
                "checkpoint no longer valid, was an unmatched start_node called?"
            );
        }
        self.parents.push((kind, at));
    }

    pub fn finish(mut self) -> GreenTree {
        assert!(self.parents.is_empty(), "unfinished nodes at end of parse");
        assert_eq!(self.children.len(), 1, "tree must have exactly one root");
        match self.children.pop() {
            Some(NodeOrToken::Node(root)) => GreenTree::new(root),
            _ => panic!("tree root must be a node"),
        }
    }
}

/// Owned green tree whose drop does not recurse through nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreenTree(Option<GreenNode>);

impl GreenTree {
    pub fn new(root: GreenNode) -> Self {
        Self(Some(root))
    }

    pub fn root(&self) -> &GreenNode {
        self.0.as_ref().expect("green tree is only emptied on drop")
    }
}

impl Drop for GreenTree {
    fn drop(&mut self) {
        let Some(root) = self.0.take() else {
            return;
        };
        // Children are cloned before their parent goes, so freeing a node only ever
        // decrements counts instead of cascading into its subtree.
        let mut pending = vec![root];
        while let Some(node) = pending.pop() {
            pending.extend(
                node.children()
                    .filter_map(NodeOrToken::into_node)
                    .map(ToOwned::to_owned),
            );
            drop(node);
        }
    }
}
