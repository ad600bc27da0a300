use crate::diagnostics::DiagnosticKind;
use crate::parser::tests::{dump, parse};

#[test]
fn invalid_character_in_name() {
    let input = "actor user B@b";

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (actor_block
        type: (actor_type)
        name: (actor_name
          (identifier "B"))
        (ERROR
          (ERROR "@")
          (identifier "b"))))
    "#);

    let tree = parse(input);
    let kinds: Vec<_> = tree.diagnostics().sorted().iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::InvalidCharacter, DiagnosticKind::UnexpectedToken]
    );
    assert_eq!(tree.diagnostics().lexical_count(), 1);
}

#[test]
fn unterminated_string() {
    let input = r#"use_case "Checkout {"#;

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        (ERROR)
        (ERROR))
      (ERROR
        (ERROR "\"Checkout {")))
    "#);

    let tree = parse(input);
    let kinds: Vec<_> = tree.diagnostics().sorted().iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::UnterminatedString, DiagnosticKind::ExpectedName]
    );
}

#[test]
fn unterminated_comment() {
    let input = "actor user Buyer /* open";

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (actor_block
        type: (actor_type)
        name: (actor_name
          (identifier "Buyer"))
        (ERROR
          (ERROR "/* open"))))
    "#);

    let tree = parse(input);
    let kinds: Vec<_> = tree.diagnostics().sorted().iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::UnterminatedComment, DiagnosticKind::UnexpectedToken]
    );
}
