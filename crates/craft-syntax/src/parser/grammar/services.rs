//! Service blocks, service definitions and their properties.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{DEPLOYMENT_TYPES, SERVICE_PROPERTY_FIRST};

impl Parser<'_> {
    /// `'services' '{' (service_definition newline*)* '}' newline*`
    pub(crate) fn parse_services_block(&mut self) {
        self.start_node(SyntaxKind::ServicesBlock);
        self.bump(); // 'services'
        if self.parse_braced(
            "services block",
            |kind| kind.is_word() || kind == SyntaxKind::Str,
            |p| p.parse_service_definition(),
        ) {
            self.eat_block_trailer();
        }
        self.finish_node();
    }

    /// `'service' name '{' (service_property newline?)* '}' newline*`
    pub(crate) fn parse_service_block(&mut self) {
        self.start_node(SyntaxKind::ServiceBlock);
        self.bump(); // 'service'
        self.expect_word("a service name");
        if self.parse_service_body("service block") {
            self.eat_block_trailer();
        }
        self.finish_node();
    }

    /// `(string | identifier) '{' (service_property newline?)* '}'`
    fn parse_service_definition(&mut self) {
        self.start_node(SyntaxKind::ServiceDefinition);
        if self.at(SyntaxKind::Str) {
            self.bump();
        } else {
            self.bump_word();
        }
        self.parse_service_body("service definition");
        self.finish_node();
    }

    fn parse_service_body(&mut self, what: &str) -> bool {
        self.parse_braced(
            what,
            |kind| SERVICE_PROPERTY_FIRST.contains(kind),
            |p| p.parse_service_property(),
        )
    }

    fn parse_service_property(&mut self) {
        match self.current() {
            SyntaxKind::KwDomains => {
                self.parse_property(SyntaxKind::DomainsProperty, SyntaxKind::KwDomains, |p| {
                    p.parse_identifier_list("a domain name")
                })
            }
            SyntaxKind::KwLanguage => {
                self.parse_property(SyntaxKind::LanguageProperty, SyntaxKind::KwLanguage, |p| {
                    p.expect_word("a language name");
                })
            }
            SyntaxKind::KwDataStores => self.parse_property(
                SyntaxKind::DataStoresProperty,
                SyntaxKind::KwDataStores,
                |p| p.parse_identifier_list("a data store name"),
            ),
            SyntaxKind::KwDeployment => self.parse_property(
                SyntaxKind::DeploymentProperty,
                SyntaxKind::KwDeployment,
                |p| p.parse_deployment_spec(),
            ),
            other => unreachable!("parse_service_property: {other:?} is not a property"),
        }
        self.finish_item("service property", |kind| {
            SERVICE_PROPERTY_FIRST.contains(kind)
        });
    }

    /// `deployment_type deployment_rules?`
    fn parse_deployment_spec(&mut self) {
        self.start_node(SyntaxKind::DeploymentSpec);

        if self.at_set(DEPLOYMENT_TYPES) {
            self.start_node(SyntaxKind::DeploymentType);
            self.bump();
            self.finish_node();
        } else {
            self.error_missing(
                DiagnosticKind::ExpectedToken,
                "expected a deployment strategy: `canary`, `blue_green` or `rolling`",
            );
        }

        if self.at(SyntaxKind::ParenOpen) {
            self.parse_deployment_rules();
        }

        self.finish_node();
    }

    /// `'(' deployment_rule (',' deployment_rule)* ','? ')'`
    fn parse_deployment_rules(&mut self) {
        self.start_node(SyntaxKind::DeploymentRules);
        self.bump(); // '('

        loop {
            self.parse_deployment_rule();
            if !self.eat(SyntaxKind::Comma) || !self.at(SyntaxKind::Percentage) {
                break;
            }
        }

        self.expect(SyntaxKind::ParenClose, "`)` to close deployment rules");
        self.finish_node();
    }

    /// `percentage '->' identifier`
    fn parse_deployment_rule(&mut self) {
        if !self.at(SyntaxKind::Percentage) {
            self.error_missing(
                DiagnosticKind::ExpectedToken,
                "expected a deployment rule such as `10% -> canary`",
            );
            return;
        }
        self.start_node(SyntaxKind::DeploymentRule);
        self.bump();
        if self.expect(SyntaxKind::Arrow, "`->` after percentage") {
            self.expect_word("a deployment target");
        }
        self.finish_node();
    }
}
