use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::SyntaxNode;
use crate::tree::{Node, SyntaxTree};

/// Renders a [`SyntaxTree`] as text.
///
/// The default output is a tree-sitter style S-expression over named nodes with field
/// labels. `raw` switches to a dump of the underlying CST with every token.
pub struct TreePrinter<'t> {
    tree: &'t SyntaxTree,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Self {
            tree,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    /// Include whitespace and comments in raw output.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            self.format_cst(&self.tree.syntax(), 0, w)
        } else {
            self.format_node(&self.tree.root_node(), None, 0, w)?;
            writeln!(w)
        }
    }

    fn format_node(
        &self,
        node: &Node<'_>,
        field: Option<&str>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        write!(w, "{}", "  ".repeat(indent))?;
        if let Some(field) = field {
            write!(w, "{field}: ")?;
        }
        write!(w, "({}", node.kind_name())?;
        if self.spans {
            write!(w, " {}", span_str(node.byte_range()))?;
        }

        if node.syntax().as_token().is_some() {
            return write!(w, " \"{}\")", escape_string(node.text()));
        }

        for child in node.named_children() {
            writeln!(w)?;
            self.format_node(&child, child.field_name(), indent + 1, w)?;
        }
        write!(w, ")")
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.cst_span(node.text_range().into());
        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if !self.trivia && t.kind().is_trivia() {
                        continue;
                    }
                    let span = self.cst_span(t.text_range().into());
                    writeln!(
                        w,
                        "{}  {:?}{} \"{}\"",
                        prefix,
                        t.kind(),
                        span,
                        escape_string(t.text())
                    )?;
                }
            }
        }
        Ok(())
    }

    fn cst_span(&self, range: std::ops::Range<usize>) -> String {
        if self.spans {
            format!(" {}", span_str(range))
        } else {
            String::new()
        }
    }
}

fn span_str(range: std::ops::Range<usize>) -> String {
    format!("[{}..{}]", range.start, range.end)
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
