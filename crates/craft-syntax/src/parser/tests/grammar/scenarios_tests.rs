use indoc::indoc;

use crate::parser::ast::{Action, Item, Trigger};
use crate::parser::tests::{dump, parse};

#[test]
fn use_case_with_trigger_and_sync_action() {
    let input = indoc! {r#"
    use_case "Checkout" {
    when Customer submits order
    Billing asks Payment to charge the card
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        name: (string "\"Checkout\"")
        (scenario
          (when_clause
            (external_trigger
              actor: (trigger_actor
                (identifier "Customer"))
              verb: (trigger_verb
                (identifier "submits"))
              phrase: (phrase
                (identifier "order")))
            (sync_action
              subject: (action_subject
                (identifier "Billing"))
              target: (action_target
                (identifier "Payment"))
              connector: (connector_word)
              phrase: (phrase
                (identifier "charge")
                (connector_word)
                (identifier "card")))))))
    "#);
}

#[test]
fn every_trigger_and_action_shape() {
    let input = indoc! {r#"
    use_case "Nightly" {
      when CRON every day at midnight
      Scheduler notifies "ReportRequested"
      Reports returns to Scheduler the summary
      Reports compiles the report

      when Billing listens "PaymentReceived"
      Ledger records payment

      when "InvoiceIssued"
      Ledger returns to
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        name: (string "\"Nightly\"")
        (scenario
          (when_clause
            (cron_trigger
              (phrase
                (identifier "every")
                (identifier "day")
                (connector_word)
                (identifier "midnight")))
            (async_action
              subject: (action_subject
                (identifier "Scheduler"))
              event: (string "\"ReportRequested\""))
            (return_action
              subject: (action_subject
                (identifier "Reports"))
              target: (action_target
                (identifier "Scheduler"))
              connector: (connector_word)
              phrase: (phrase
                (identifier "summary")))
            (internal_action
              subject: (action_subject
                (identifier "Reports"))
              verb: (action_verb
                (identifier "compiles"))
              connector: (connector_word)
              phrase: (phrase
                (identifier "report"))))
          (scenario_continuation
            (scenario
              (when_clause
                (domain_listener
                  domain: (identifier "Billing")
                  event: (string "\"PaymentReceived\""))
                (internal_action
                  subject: (action_subject
                    (identifier "Ledger"))
                  verb: (action_verb
                    (identifier "records"))
                  phrase: (phrase
                    (identifier "payment"))))
              (scenario_continuation
                (scenario
                  (when_clause
                    (event_trigger
                      (string "\"InvoiceIssued\""))
                    (return_action
                      subject: (action_subject
                        (identifier "Ledger"))
                      phrase: (phrase
                        (connector_word)))))))))))
    "#);
}

#[test]
fn action_after_blank_line_continues_the_scenario() {
    let input = indoc! {r#"
    use_case "Signup" {
      when User registers
      Accounts creates profile

      Mailer sends welcome

    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        name: (string "\"Signup\"")
        (scenario
          (when_clause
            (external_trigger
              actor: (trigger_actor
                (identifier "User"))
              verb: (trigger_verb
                (identifier "registers")))
            (internal_action
              subject: (action_subject
                (identifier "Accounts"))
              verb: (action_verb
                (identifier "creates"))
              phrase: (phrase
                (identifier "profile"))))
          (scenario_continuation
            (internal_action
              subject: (action_subject
                (identifier "Mailer"))
              verb: (action_verb
                (identifier "sends"))
              phrase: (phrase
                (identifier "welcome")))
            (scenario_continuation)))))
    "#);
}

#[test]
fn lone_connector_is_the_phrase() {
    let input = indoc! {r#"
    use_case "Login" {
      when User logs in
      Auth returns to the caller
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        name: (string "\"Login\"")
        (scenario
          (when_clause
            (external_trigger
              actor: (trigger_actor
                (identifier "User"))
              verb: (trigger_verb
                (identifier "logs"))
              phrase: (phrase
                (connector_word)))
            (return_action
              subject: (action_subject
                (identifier "Auth"))
              connector: (connector_word)
              phrase: (phrase
                (connector_word)
                (identifier "caller")))))))
    "#);
}

#[test]
fn keywords_inside_phrase_are_words() {
    let input = indoc! {r#"
    use_case "Refund" {
      when Customer cancels
      Billing asks Payment to refund when the order returns
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        name: (string "\"Refund\"")
        (scenario
          (when_clause
            (external_trigger
              actor: (trigger_actor
                (identifier "Customer"))
              verb: (trigger_verb
                (identifier "cancels")))
            (sync_action
              subject: (action_subject
                (identifier "Billing"))
              target: (action_target
                (identifier "Payment"))
              connector: (connector_word)
              phrase: (phrase
                (identifier "refund")
                (identifier "when")
                (connector_word)
                (identifier "order")
                (identifier "returns")))))))
    "#);
}

#[test]
fn one_line_use_case() {
    let input = r#"use_case "Ping" { when "Pinged" }"#;

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        name: (string "\"Ping\"")
        (scenario
          (when_clause
            (event_trigger
              (string "\"Pinged\""))))))
    "#);
}

#[test]
fn scenarios_collect_their_actions() {
    let input = indoc! {r#"
    use_case "Signup" {
      when User registers
      Accounts creates profile

      Mailer sends welcome

      when "ProfileCreated"
      Audit notifies "Logged"
    }
    "#};

    let tree = parse(input);
    assert!(!tree.has_errors());
    let file = tree.source_file();
    let Some(Item::UseCase(use_case)) = file.items().next() else {
        panic!("expected a use case");
    };
    assert_eq!(use_case.name().unwrap().text(), "\"Signup\"");

    let scenarios: Vec<_> = use_case.scenarios().collect();
    assert_eq!(scenarios.len(), 2);

    let first = &scenarios[0];
    let Some(Trigger::External(trigger)) = first.when_clause().unwrap().trigger() else {
        panic!("expected an external trigger");
    };
    assert_eq!(trigger.actor().unwrap().text(), "User");
    assert_eq!(trigger.verb().unwrap().text(), "registers");
    assert!(trigger.phrase().is_none());

    let subjects: Vec<String> = first
        .actions()
        .iter()
        .map(|a| a.subject().unwrap().text().to_string())
        .collect();
    assert_eq!(subjects, ["Accounts", "Mailer"]);

    let second = &scenarios[1];
    assert!(matches!(
        second.when_clause().unwrap().trigger(),
        Some(Trigger::Event(_))
    ));
    let actions = second.actions();
    let [Action::Async(notify)] = actions.as_slice() else {
        panic!("expected a single async action");
    };
    assert_eq!(notify.event().unwrap().text(), "\"Logged\"");
}

#[test]
fn phrase_text_joins_words() {
    let tree = parse("use_case \"Pay\" {\n  when Customer pays\n  Billing asks Payment to charge the card\n}\n");
    let file = tree.source_file();
    let Some(Item::UseCase(use_case)) = file.items().next() else {
        panic!("expected a use case");
    };
    let scenario = use_case.scenarios().next().unwrap();
    let actions = scenario.actions();
    let Action::Sync(ask) = &actions[0] else {
        panic!("expected a sync action");
    };
    assert_eq!(ask.target().unwrap().text(), "Payment");
    assert_eq!(ask.connector().unwrap().text(), "to");
    assert_eq!(actions[0].phrase().unwrap().text(), "charge the card");
}
