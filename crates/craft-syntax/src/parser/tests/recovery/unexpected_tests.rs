use indoc::indoc;

use crate::diagnostics::DiagnosticKind;
use crate::parser::tests::{dump, parse};

#[test]
fn junk_line_inside_block() {
    let input = indoc! {r#"
    domains {
      Sales {
        Leads
      }
      { Leads }
    }
    actor user Buyer
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (domains_block
        (domain_definition
          name: (identifier "Sales")
          (subdomain
            (identifier "Leads")))
        (ERROR
          (identifier "Leads")))
      (actor_block
        type: (actor_type)
        name: (actor_name
          (identifier "Buyer"))))
    "#);

    let tree = parse(input);
    let kinds: Vec<_> = tree.diagnostics().iter().map(|d| d.kind).collect();
    assert_eq!(kinds, [DiagnosticKind::UnexpectedToken]);
}

#[test]
fn junk_at_top_level() {
    let input = indoc! {r#"
    hello world
    actor user Buyer
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (ERROR
        (identifier "hello")
        (identifier "world"))
      (actor_block
        type: (actor_type)
        name: (actor_name
          (identifier "Buyer"))))
    "#);

    let tree = parse(input);
    let diagnostics = tree.diagnostics().sorted();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "expected a top-level item, found `hello`"
    );
}

#[test]
fn trailing_tokens_after_property() {
    let input = indoc! {r#"
    service Api {
      language: rust go
    }
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (service_block
        name: (identifier "Api")
        (language_property
          (identifier "rust"))
        (ERROR
          (identifier "go"))))
    "#);

    let tree = parse(input);
    let diagnostics = tree.diagnostics().sorted();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "unexpected token after service property");
}

#[test]
fn junk_between_actor_definitions() {
    let input = "actors { user Customer 42 system Billing }";

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (actors_block
        (actor_definition
          type: (actor_type)
          name: (actor_name
            (identifier "Customer")))
        (ERROR
          (number "42")
          (identifier "Billing"))))
    "#);

    let tree = parse(input);
    let diagnostics = tree.diagnostics().sorted();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "unexpected token after actor definition");
}
