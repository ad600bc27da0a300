//! Shared productions: phrases, connector words and identifier lists.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::PHRASE_FIRST;
use crate::parser::cst::{CONNECTORS, SyntaxKind};

impl Parser<'_> {
    /// `(identifier | string | connector_word)+`, greedy up to the end of the line
    /// or the first token that cannot continue a phrase.
    pub(crate) fn parse_phrase(&mut self) {
        self.start_node(SyntaxKind::Phrase);
        while self.at_set(PHRASE_FIRST) {
            match self.current() {
                SyntaxKind::Str => self.bump(),
                kind if kind.is_connector() => self.parse_connector_word(),
                _ => self.bump_word(),
            }
        }
        self.finish_node();
    }

    pub(crate) fn parse_connector_word(&mut self) {
        self.start_node(SyntaxKind::ConnectorWord);
        self.bump();
        self.finish_node();
    }

    /// Optional `connector` field followed by a `phrase` field.
    ///
    /// A connector right here is the node's own connector only when more phrase
    /// material follows it; otherwise it is the phrase.
    pub(crate) fn parse_connector_and_phrase(&mut self, phrase_required: bool) {
        if self.at_set(CONNECTORS) && PHRASE_FIRST.contains(self.nth(1)) {
            self.parse_connector_word();
        }
        if self.at_set(PHRASE_FIRST) {
            self.parse_phrase();
        } else if phrase_required {
            self.error_missing(DiagnosticKind::ExpectedPhrase, "expected a phrase");
        }
    }

    /// `identifier (',' identifier)* ','?`
    pub(crate) fn parse_identifier_list(&mut self, what: &str) {
        if !self.at_word() {
            self.error_missing(DiagnosticKind::ExpectedName, format!("expected {what}"));
            return;
        }
        self.start_node(SyntaxKind::IdentifierList);
        self.bump_word();
        while self.eat(SyntaxKind::Comma) {
            if !self.at_word() {
                break;
            }
            self.bump_word();
        }
        self.finish_node();
    }

    /// `keyword ':' value` with the keyword already checked by the caller.
    pub(crate) fn parse_property(
        &mut self,
        kind: SyntaxKind,
        keyword: SyntaxKind,
        value: impl FnOnce(&mut Self),
    ) {
        self.assert_current(keyword);
        self.start_node(kind);
        self.bump();
        if self.expect(SyntaxKind::Colon, "`:` after property name") {
            value(self);
        }
        self.finish_node();
    }

    /// Trailing `newline*` owned by a top-level block.
    pub(crate) fn eat_block_trailer(&mut self) {
        self.eat_newlines();
    }
}
