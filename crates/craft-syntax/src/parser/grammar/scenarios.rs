//! Use cases: scenarios, triggers and actions.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::PHRASE_FIRST;
use crate::parser::cst::{CONNECTORS, SyntaxKind};

impl Parser<'_> {
    /// `'use_case' string '{' newline* scenario '}' newline*`
    pub(crate) fn parse_use_case_block(&mut self) {
        self.start_node(SyntaxKind::UseCaseBlock);
        self.bump(); // 'use_case'

        if !self.eat(SyntaxKind::Str) {
            self.error_missing(
                DiagnosticKind::ExpectedName,
                "expected a use case name as a string",
            );
        }

        let open = self.current_span();
        if self.expect(SyntaxKind::BraceOpen, "`{` to open use case") {
            self.eat_newlines();
            if self.at(SyntaxKind::KwWhen) {
                self.parse_scenario();
            } else {
                self.error_missing(
                    DiagnosticKind::ExpectedTrigger,
                    "expected a scenario starting with `when`",
                );
            }
            self.close_block("use case", open, |_, _| false);
            self.eat_block_trailer();
        }

        self.finish_node();
    }

    /// `when_clause scenario_continuation?`
    ///
    /// Scenarios and continuations nest into each other for every further `when` or
    /// action after a blank line. The chain is built iteratively with the nodes left
    /// open on the builder and closed together at the end.
    fn parse_scenario(&mut self) {
        self.start_node(SyntaxKind::Scenario);
        let mut open = 1;

        'scenario: loop {
            self.parse_when_clause();

            loop {
                if self.at(SyntaxKind::KwWhen) {
                    self.start_node(SyntaxKind::ScenarioContinuation);
                    self.start_node(SyntaxKind::Scenario);
                    open += 2;
                    continue 'scenario;
                }
                if !self.at(SyntaxKind::Newline) {
                    break 'scenario;
                }

                self.start_node(SyntaxKind::ScenarioContinuation);
                open += 1;
                self.eat_newlines();

                match self.current() {
                    SyntaxKind::KwWhen => {
                        self.start_node(SyntaxKind::Scenario);
                        open += 1;
                        continue 'scenario;
                    }
                    kind if kind.is_word() => {
                        self.parse_action();
                        self.finish_line("action");
                    }
                    _ => break 'scenario,
                }
            }
        }

        self.finish_nodes(open);
    }

    /// `'when' trigger newline (action newline)*`
    ///
    /// The newline closing the last line may be omitted before `}`.
    fn parse_when_clause(&mut self) {
        self.assert_current(SyntaxKind::KwWhen);
        self.start_node(SyntaxKind::WhenClause);
        self.bump();

        self.parse_trigger();
        self.finish_line("trigger");

        if self.eat(SyntaxKind::Newline) {
            while self.at_word() && !self.at(SyntaxKind::KwWhen) {
                self.parse_action();
                self.finish_line("action");
                if !self.eat(SyntaxKind::Newline) {
                    break;
                }
            }
        }

        self.finish_node();
    }

    /// Tried in order: domain listener, cron, external trigger, event.
    fn parse_trigger(&mut self) {
        let first = self.current();
        let second = self.nth(1);

        if first.is_word() && second == SyntaxKind::KwListens {
            self.parse_domain_listener();
        } else if first == SyntaxKind::KwCron {
            self.start_node(SyntaxKind::CronTrigger);
            self.bump();
            if self.at_set(PHRASE_FIRST) {
                self.parse_phrase();
            }
            self.finish_node();
        } else if first.is_word() && second.is_word() {
            self.parse_external_trigger();
        } else if first == SyntaxKind::Str {
            self.start_node(SyntaxKind::EventTrigger);
            self.bump();
            self.finish_node();
        } else {
            self.error_missing(
                DiagnosticKind::ExpectedTrigger,
                "expected a trigger: `<actor> <verb> ...`, `<domain> listens \"event\"`, `CRON ...` or \"event\"",
            );
        }
    }

    /// `identifier 'listens' string`
    fn parse_domain_listener(&mut self) {
        self.start_node(SyntaxKind::DomainListener);
        self.bump_word();
        self.bump(); // 'listens'
        if !self.eat(SyntaxKind::Str) {
            self.error_missing(
                DiagnosticKind::ExpectedToken,
                "expected the event name as a string",
            );
        }
        self.finish_node();
    }

    /// `trigger_actor trigger_verb connector_word? phrase?`
    fn parse_external_trigger(&mut self) {
        self.start_node(SyntaxKind::ExternalTrigger);
        self.expect_name_node(SyntaxKind::TriggerActor, "an actor");
        self.expect_name_node(SyntaxKind::TriggerVerb, "a verb");
        self.parse_connector_and_phrase(false);
        self.finish_node();
    }

    /// The word after the subject selects the action shape; anything that is not
    /// `notifies`, `returns` or `asks` is the verb of an internal action.
    fn parse_action(&mut self) {
        match self.nth(1) {
            SyntaxKind::KwNotifies => self.parse_async_action(),
            SyntaxKind::KwReturns => self.parse_return_action(),
            SyntaxKind::KwAsks => self.parse_sync_action(),
            _ => self.parse_internal_action(),
        }
    }

    /// `subject 'asks' target connector_word? phrase`
    fn parse_sync_action(&mut self) {
        self.start_node(SyntaxKind::SyncAction);
        self.expect_name_node(SyntaxKind::ActionSubject, "an action subject");
        self.bump(); // 'asks'
        self.expect_name_node(SyntaxKind::ActionTarget, "the service being asked");
        self.parse_connector_and_phrase(true);
        self.finish_node();
    }

    /// `subject 'notifies' string`
    fn parse_async_action(&mut self) {
        self.start_node(SyntaxKind::AsyncAction);
        self.expect_name_node(SyntaxKind::ActionSubject, "an action subject");
        self.bump(); // 'notifies'
        if !self.eat(SyntaxKind::Str) {
            self.error_missing(
                DiagnosticKind::ExpectedToken,
                "expected the event name as a string",
            );
        }
        self.finish_node();
    }

    /// `subject verb connector_word? phrase`
    fn parse_internal_action(&mut self) {
        self.start_node(SyntaxKind::InternalAction);
        self.expect_name_node(SyntaxKind::ActionSubject, "an action subject");
        self.expect_name_node(SyntaxKind::ActionVerb, "a verb");
        self.parse_connector_and_phrase(true);
        self.finish_node();
    }

    /// `subject 'returns' ('to' target)? connector_word? phrase`
    ///
    /// `to` introduces a target only when a non-connector word follows it and the
    /// phrase goes on after that word; otherwise `to` is part of the phrase.
    fn parse_return_action(&mut self) {
        self.start_node(SyntaxKind::ReturnAction);
        self.expect_name_node(SyntaxKind::ActionSubject, "an action subject");
        self.bump(); // 'returns'

        let target = self.nth(1);
        if self.at(SyntaxKind::KwTo)
            && target.is_word()
            && !CONNECTORS.contains(target)
            && PHRASE_FIRST.contains(self.nth(2))
        {
            self.bump(); // 'to'
            self.expect_name_node(SyntaxKind::ActionTarget, "a return target");
        }

        self.parse_connector_and_phrase(true);
        self.finish_node();
    }
}
