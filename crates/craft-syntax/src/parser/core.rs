//! Parser state machine and low-level operations.

use rowan::{TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::green::{Checkpoint, GreenTree, TreeBuilder};
use super::lexer::Token;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Trivia tokens are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: TreeBuilder,
    pub(super) diagnostics: Diagnostics,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: TreeBuilder::new(),
            diagnostics: Diagnostics::new(),
            last_diagnostic_pos: None,
            debug_fuel: std::cell::Cell::new(256),
        }
    }

    pub(super) fn finish(mut self) -> (GreenTree, Diagnostics) {
        self.drain_trivia();
        (self.builder.finish(), self.diagnostics)
    }

    /// Reports every lexical error token once, before any structural diagnostics.
    pub(super) fn report_lexical_errors(&mut self) {
        for token in &self.tokens {
            let kind = match token.kind {
                SyntaxKind::UnterminatedStr => DiagnosticKind::UnterminatedString,
                SyntaxKind::UnterminatedComment => DiagnosticKind::UnterminatedComment,
                SyntaxKind::Garbage => DiagnosticKind::InvalidCharacter,
                _ => continue,
            };
            let builder = self.diagnostics.report(kind, token.span);
            if kind == DiagnosticKind::InvalidCharacter {
                builder
                    .message(format!(
                        "invalid character `{}`",
                        token.text(self.source).escape_debug()
                    ))
                    .emit();
            } else {
                builder.emit();
            }
        }
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// Current non-trivia token kind; `Eof` past the end.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth(0)
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn nth(&self, n: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        let source = self.source;
        self.tokens.get(self.pos).map_or("", |t| t.text(source))
    }

    pub(super) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Identifiers and keywords, anything that can stand in for a name.
    pub(super) fn at_word(&mut self) -> bool {
        self.current().is_word()
    }

    /// Newline, closing brace or end of input: where a line-level construct may stop.
    pub(super) fn at_line_end(&mut self) -> bool {
        matches!(
            self.current(),
            SyntaxKind::Newline | SyntaxKind::BraceClose | SyntaxKind::Eof
        )
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            self.builder
                .token(token.kind.into(), token.text(self.source));
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn finish_nodes(&mut self, count: usize) {
        for _ in 0..count {
            self.builder.finish_node();
        }
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        self.skip_trivia_to_buffer();
        assert!(!self.eof(), "bump called at EOF");
        let kind = self.tokens[self.pos].kind;
        self.bump_remap(kind);
    }

    /// Consumes the current token, recording it under `kind`.
    ///
    /// Keywords in name position are recorded as `Id`.
    pub(super) fn bump_remap(&mut self, kind: SyntaxKind) {
        self.skip_trivia_to_buffer();
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        self.builder.token(kind.into(), token.text(self.source));
        self.pos += 1;
    }

    /// Consumes a word as an identifier.
    pub(super) fn bump_word(&mut self) {
        self.assert_word();
        self.bump_remap(SyntaxKind::Id);
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_newlines(&mut self) {
        while self.eat(SyntaxKind::Newline) {}
    }

    /// On mismatch: diagnostic plus a zero-width `ERROR` node, nothing consumed.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error_missing(DiagnosticKind::ExpectedToken, format!("expected {what}"));
        false
    }

    /// A word wrapped in a node of `kind`, or a missing-name error.
    pub(super) fn expect_name_node(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if !self.at_word() {
            self.error_missing(DiagnosticKind::ExpectedName, format!("expected {what}"));
            return false;
        }
        self.start_node(kind);
        self.bump_word();
        self.finish_node();
        true
    }

    /// A bare word recorded as an identifier token, or a missing-name error.
    pub(super) fn expect_word(&mut self, what: &str) -> bool {
        if !self.at_word() {
            self.error_missing(DiagnosticKind::ExpectedName, format!("expected {what}"));
            return false;
        }
        self.bump_word();
        true
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    /// Diagnostic at the current token without consuming it.
    pub(super) fn error_at_current(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    /// Something required is absent: report it and leave a zero-width `ERROR` node.
    pub(super) fn error_missing(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        tracing::trace!(at = ?self.current(), "inserting missing node");
        self.error_at_current(kind, message);
        self.start_node(SyntaxKind::Error);
        self.finish_node();
    }

    /// Wraps unexpected tokens in an `ERROR` node up to the next synchronisation point:
    /// a newline outside nested braces, the `}` closing the enclosing block, or end of
    /// input. The first token is always consumed.
    pub(super) fn skip_to_sync(&mut self, message: impl Into<String>) {
        if self.at(SyntaxKind::Eof) {
            return;
        }
        tracing::trace!(at = ?self.current(), "skipping to synchronisation point");
        self.error_at_current(DiagnosticKind::UnexpectedToken, message);
        self.start_node(SyntaxKind::Error);

        let mut depth = 0u32;
        let mut first = true;
        loop {
            match self.current() {
                SyntaxKind::Eof => break,
                SyntaxKind::Newline | SyntaxKind::BraceClose if depth == 0 && !first => break,
                SyntaxKind::BraceOpen => depth += 1,
                SyntaxKind::BraceClose => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
            first = false;
        }

        self.finish_node();
    }

    /// Ensures a line-level construct ends here, discarding anything else on the line.
    pub(super) fn finish_line(&mut self, what: &str) {
        if !self.at_line_end() {
            self.skip_to_sync(format!("unexpected token after {what}"));
        }
    }

    /// Ends a block item. The next item may follow on the same line; anything else
    /// before the line end is skipped.
    pub(super) fn finish_item(&mut self, what: &str, item_first: impl Fn(SyntaxKind) -> bool) {
        let kind = self.current();
        if !self.at_line_end() && !item_first(kind) {
            self.skip_to_sync(format!("unexpected token after {what}"));
        }
    }

    /// Block body: `'{' newline* (item newline*)* '}'`.
    ///
    /// `item_first` decides whether the current token starts an item; `item` must
    /// consume at least one token when called. Unknown lines are skipped one at a time.
    pub(super) fn parse_braced(
        &mut self,
        what: &str,
        item_first: impl Fn(SyntaxKind) -> bool,
        mut item: impl FnMut(&mut Self),
    ) -> bool {
        let open = self.current_span();
        if !self.expect(SyntaxKind::BraceOpen, &format!("`{{` to open {what}")) {
            return false;
        }
        self.close_block(what, open, |p, kind| {
            if item_first(kind) {
                item(p);
                true
            } else {
                false
            }
        });
        true
    }

    /// Consumes lines up to and including the `}` matching the brace at `open`.
    ///
    /// `line` is offered every token that starts a line element and returns whether it
    /// handled it; everything it declines is skipped as an error.
    pub(super) fn close_block(
        &mut self,
        what: &str,
        open: TextRange,
        mut line: impl FnMut(&mut Self, SyntaxKind) -> bool,
    ) {
        loop {
            match self.current() {
                SyntaxKind::Newline => self.bump(),
                SyntaxKind::BraceClose => {
                    self.bump();
                    return;
                }
                SyntaxKind::Eof => {
                    self.error_unclosed_block(what, open);
                    return;
                }
                kind => {
                    if !line(self, kind) {
                        self.skip_to_sync(format!("unexpected token in {what}"));
                    }
                }
            }
        }
    }

    pub(super) fn error_unclosed_block(&mut self, what: &str, open: TextRange) {
        let current = self.current_span();
        if self.should_report(current.start()) {
            let full_range = TextRange::new(open.start(), current.end());
            self.diagnostics
                .report(DiagnosticKind::UnclosedBlock, full_range)
                .message(format!("unclosed {what}"))
                .related_to("block opened here", open)
                .emit();
        }
        self.start_node(SyntaxKind::Error);
        self.finish_node();
    }
}
