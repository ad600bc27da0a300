//! Domain, actor and exposure blocks.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{ACTOR_TYPES, EXPOSURE_PROPERTY_FIRST};

impl Parser<'_> {
    /// `'domain' name '{' (subdomain newline*)* '}' newline*`
    pub(crate) fn parse_domain_block(&mut self) {
        self.start_node(SyntaxKind::DomainBlock);
        self.bump(); // 'domain'
        self.expect_word("a domain name");
        if self.parse_subdomains("domain block") {
            self.eat_block_trailer();
        }
        self.finish_node();
    }

    /// `'domains' '{' (domain_definition newline*)* '}' newline*`
    pub(crate) fn parse_domains_block(&mut self) {
        self.start_node(SyntaxKind::DomainsBlock);
        self.bump(); // 'domains'
        if self.parse_braced(
            "domains block",
            SyntaxKind::is_word,
            |p| p.parse_domain_definition(),
        ) {
            self.eat_block_trailer();
        }
        self.finish_node();
    }

    /// `name '{' (subdomain newline*)* '}'`
    fn parse_domain_definition(&mut self) {
        self.start_node(SyntaxKind::DomainDefinition);
        self.bump_word();
        self.parse_subdomains("domain definition");
        self.finish_node();
    }

    fn parse_subdomains(&mut self, what: &str) -> bool {
        self.parse_braced(what, SyntaxKind::is_word, |p| {
            p.start_node(SyntaxKind::Subdomain);
            p.bump_word();
            p.finish_node();
        })
    }

    /// `'actor' actor_type actor_name newline*`
    pub(crate) fn parse_actor_block(&mut self) {
        self.start_node(SyntaxKind::ActorBlock);
        self.bump(); // 'actor'
        self.parse_actor_type_and_name();
        self.finish_line("actor declaration");
        self.eat_block_trailer();
        self.finish_node();
    }

    /// `'actors' '{' (actor_definition newline?)* '}' newline*`
    pub(crate) fn parse_actors_block(&mut self) {
        self.start_node(SyntaxKind::ActorsBlock);
        self.bump(); // 'actors'
        if self.parse_braced(
            "actors block",
            |kind| ACTOR_TYPES.contains(kind),
            |p| {
                p.start_node(SyntaxKind::ActorDefinition);
                p.parse_actor_type_and_name();
                p.finish_node();
                p.finish_item("actor definition", |kind| ACTOR_TYPES.contains(kind));
            },
        ) {
            self.eat_block_trailer();
        }
        self.finish_node();
    }

    fn parse_actor_type_and_name(&mut self) {
        if self.at_set(ACTOR_TYPES) {
            self.start_node(SyntaxKind::ActorType);
            self.bump();
            self.finish_node();
        } else {
            self.error_missing(
                DiagnosticKind::ExpectedToken,
                "expected an actor type: `user`, `system` or `service`",
            );
        }
        self.expect_name_node(SyntaxKind::ActorName, "an actor name");
    }

    /// `'exposure' name '{' (exposure_property newline?)* '}' newline*`
    pub(crate) fn parse_exposure_block(&mut self) {
        self.start_node(SyntaxKind::ExposureBlock);
        self.bump(); // 'exposure'
        self.expect_word("an exposure name");
        if self.parse_braced(
            "exposure block",
            |kind| EXPOSURE_PROPERTY_FIRST.contains(kind),
            |p| p.parse_exposure_property(),
        ) {
            self.eat_block_trailer();
        }
        self.finish_node();
    }

    fn parse_exposure_property(&mut self) {
        let (kind, keyword, what) = match self.current() {
            SyntaxKind::KwTo => (SyntaxKind::ToProperty, SyntaxKind::KwTo, "an actor name"),
            SyntaxKind::KwThrough => (
                SyntaxKind::ThroughProperty,
                SyntaxKind::KwThrough,
                "a gateway name",
            ),
            SyntaxKind::KwOf => (SyntaxKind::OfProperty, SyntaxKind::KwOf, "a domain name"),
            other => unreachable!("parse_exposure_property: {other:?} is not a property"),
        };
        self.parse_property(kind, keyword, |p| p.parse_identifier_list(what));
        self.finish_item("exposure property", |kind| {
            EXPOSURE_PROPERTY_FIRST.contains(kind)
        });
    }
}
