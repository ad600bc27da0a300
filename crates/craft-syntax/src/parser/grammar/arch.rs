//! Architecture blocks: sections, component chains and modifiers.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{ARCH_SECTION_FIRST, BOOLEANS};

impl Parser<'_> {
    /// `'arch' name? '{' newline* arch_section '}' newline*`
    pub(crate) fn parse_arch_block(&mut self) {
        self.start_node(SyntaxKind::ArchBlock);
        self.bump(); // 'arch'

        if self.at_word() {
            self.bump_word();
        }

        let open = self.current_span();
        if self.expect(SyntaxKind::BraceOpen, "`{` to open arch block") {
            self.eat_newlines();
            if self.at_set(ARCH_SECTION_FIRST) {
                self.parse_arch_sections();
            } else {
                self.error_missing(
                    DiagnosticKind::ExpectedSection,
                    "expected `presentation:` or `gateway:`",
                );
            }
            self.close_block("arch block", open, |_, _| false);
            self.eat_block_trailer();
        }

        self.finish_node();
    }

    /// A section and everything chained after it through continuations.
    ///
    /// Sections nest through `arch_continuation`, so a long layer listing is a deep
    /// right spine. It is built iteratively: nodes stay open on the builder and are
    /// closed together once the spine ends.
    fn parse_arch_sections(&mut self) {
        let mut open = self.start_arch_section();

        loop {
            self.parse_arch_component();
            if !self.at(SyntaxKind::Newline) {
                break;
            }

            self.start_node(SyntaxKind::ArchContinuation);
            open += 1;
            self.eat_newlines();

            match self.current() {
                kind if ARCH_SECTION_FIRST.contains(kind) => {
                    open += self.start_arch_section();
                }
                kind if kind.is_word() => {
                    self.start_node(SyntaxKind::ArchComponentList);
                    open += 1;
                }
                _ => break,
            }
        }

        self.finish_nodes(open);
    }

    /// Opens a section and its component list; returns the number of open nodes.
    fn start_arch_section(&mut self) -> usize {
        let kind = match self.current() {
            SyntaxKind::KwPresentation => SyntaxKind::PresentationSection,
            SyntaxKind::KwGateway => SyntaxKind::GatewaySection,
            other => unreachable!("start_arch_section: {other:?} does not start a section"),
        };
        self.start_node(kind);
        self.bump();
        self.expect(SyntaxKind::Colon, "`:` after section name");
        self.eat_newlines();
        self.start_node(SyntaxKind::ArchComponentList);
        2
    }

    /// `simple_component | component_flow`, decided after the first component.
    fn parse_arch_component(&mut self) {
        if !self.at_word() {
            self.error_missing(DiagnosticKind::ExpectedComponent, "expected a component");
            return;
        }

        let checkpoint = self.checkpoint();
        self.parse_component_with_modifiers();

        if !self.at(SyntaxKind::Gt) {
            self.start_node_at(checkpoint, SyntaxKind::SimpleComponent);
            self.finish_node();
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::ComponentFlow);
        while self.eat(SyntaxKind::Gt) {
            if !self.at_word() {
                self.error_missing(
                    DiagnosticKind::ExpectedComponent,
                    "expected a component after `>`",
                );
                break;
            }
            self.parse_component_with_modifiers();
        }
        self.finish_node();
    }

    /// `name ('[' modifier_list ']')?`
    fn parse_component_with_modifiers(&mut self) {
        self.start_node(SyntaxKind::ComponentWithModifiers);
        self.expect_name_node(SyntaxKind::ComponentName, "a component name");
        if self.at(SyntaxKind::BracketOpen) {
            self.parse_component_modifiers();
        }
        self.finish_node();
    }

    fn parse_component_modifiers(&mut self) {
        self.start_node(SyntaxKind::ComponentModifiers);
        self.bump(); // '['

        if self.at_word() {
            self.start_node(SyntaxKind::ModifierList);
            loop {
                self.parse_modifier();
                if !self.eat(SyntaxKind::Comma) || !self.at_word() {
                    break;
                }
            }
            self.finish_node();
        } else {
            self.error_missing(DiagnosticKind::ExpectedName, "expected a modifier");
        }

        self.expect(SyntaxKind::BracketClose, "`]` to close modifiers");
        self.finish_node();
    }

    /// `key (':' value)?` where value is an identifier, number or boolean.
    fn parse_modifier(&mut self) {
        self.start_node(SyntaxKind::Modifier);
        self.expect_name_node(SyntaxKind::ModifierKey, "a modifier name");

        if self.eat(SyntaxKind::Colon) {
            match self.current() {
                SyntaxKind::Number => self.bump(),
                kind if BOOLEANS.contains(kind) => {
                    self.start_node(SyntaxKind::Boolean);
                    self.bump();
                    self.finish_node();
                }
                kind if kind.is_word() => self.bump_word(),
                _ => self.error_missing(
                    DiagnosticKind::ExpectedToken,
                    "expected a modifier value: identifier, number or boolean",
                ),
            }
        }

        self.finish_node();
    }
}
