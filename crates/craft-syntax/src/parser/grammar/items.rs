use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::ITEM_FIRST;

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.report_lexical_errors();
        self.start_node(SyntaxKind::SourceFile);

        loop {
            match self.current() {
                SyntaxKind::Eof => break,
                SyntaxKind::Newline => self.bump(),
                kind if ITEM_FIRST.contains(kind) => self.parse_item(kind),
                _ => {
                    let text = self.current_text();
                    self.skip_to_sync(format!(
                        "expected a top-level item, found `{}`",
                        text.escape_debug()
                    ));
                }
            }
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// Dispatch on the leading keyword.
    fn parse_item(&mut self, keyword: SyntaxKind) {
        match keyword {
            SyntaxKind::KwArch => self.parse_arch_block(),
            SyntaxKind::KwServices => self.parse_services_block(),
            SyntaxKind::KwService => self.parse_service_block(),
            SyntaxKind::KwDomain => self.parse_domain_block(),
            SyntaxKind::KwDomains => self.parse_domains_block(),
            SyntaxKind::KwActors => self.parse_actors_block(),
            SyntaxKind::KwActor => self.parse_actor_block(),
            SyntaxKind::KwExposure => self.parse_exposure_block(),
            SyntaxKind::KwUseCase => self.parse_use_case_block(),
            _ => unreachable!("parse_item: {keyword:?} is not a top-level keyword"),
        }
    }
}
