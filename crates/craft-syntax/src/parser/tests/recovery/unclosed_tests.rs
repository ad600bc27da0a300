use crate::diagnostics::DiagnosticKind;
use crate::parser::tests::{dump, parse};

#[test]
fn unclosed_nested_blocks() {
    let input = "services {\n  Api {\n    language: rust\n";

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (services_block
        (service_definition
          name: (identifier "Api")
          (language_property
            (identifier "rust"))
          (ERROR))
        (ERROR)))
    "#);

    let tree = parse(input);
    let diagnostics = tree.diagnostics().sorted();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::UnclosedBlock);
    assert_eq!(diagnostics[0].message, "unclosed service definition");
    assert_eq!(diagnostics[0].related[0].message, "block opened here");
    assert_eq!(diagnostics[0].line_col(input), (2, 7));
}

#[test]
fn unclosed_use_case() {
    let input = "use_case \"Open\" {\n  when \"Started\"\n";

    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (use_case_block
        name: (string "\"Open\"")
        (scenario
          (when_clause
            (event_trigger
              (string "\"Started\""))))
        (ERROR)))
    "#);

    let tree = parse(input);
    let kinds: Vec<_> = tree.diagnostics().iter().map(|d| d.kind).collect();
    assert_eq!(kinds, [DiagnosticKind::UnclosedBlock]);
}
