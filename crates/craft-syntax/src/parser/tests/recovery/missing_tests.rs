use indoc::indoc;

use crate::diagnostics::DiagnosticKind;
use crate::parser::tests::{dump, parse};

#[test]
fn domain_without_name() {
    let input = "domain { }";

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (domain_block
        (ERROR)))
    "#);

    let tree = parse(input);
    let diagnostics = tree.diagnostics().sorted();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::ExpectedName);
    assert_eq!(diagnostics[0].message, "expected a domain name");
    assert_eq!(diagnostics[0].line_col(input), (1, 8));
}

#[test]
fn sync_action_without_phrase() {
    let input = indoc! {r#"
    use_case "Pay" {
      when Customer pays
      Billing asks Payment
    }
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        name: (string "\"Pay\"")
        (scenario
          (when_clause
            (external_trigger
              actor: (trigger_actor
                (identifier "Customer"))
              verb: (trigger_verb
                (identifier "pays")))
            (sync_action
              subject: (action_subject
                (identifier "Billing"))
              target: (action_target
                (identifier "Payment"))
              (ERROR))))))
    "#);

    let tree = parse(input);
    let kinds: Vec<_> = tree.diagnostics().iter().map(|d| d.kind).collect();
    assert_eq!(kinds, [DiagnosticKind::ExpectedPhrase]);
}

#[test]
fn arch_block_without_section() {
    let input = "arch Shop { }";

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (arch_block
        name: (identifier "Shop")
        (ERROR)))
    "#);

    let tree = parse(input);
    let kinds: Vec<_> = tree.diagnostics().iter().map(|d| d.kind).collect();
    assert_eq!(kinds, [DiagnosticKind::ExpectedSection]);
}

#[test]
fn use_case_without_scenario() {
    let input = r#"use_case "Idle" { }"#;

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        name: (string "\"Idle\"")
        (ERROR)))
    "#);

    let tree = parse(input);
    let kinds: Vec<_> = tree.diagnostics().iter().map(|d| d.kind).collect();
    assert_eq!(kinds, [DiagnosticKind::ExpectedTrigger]);
}
