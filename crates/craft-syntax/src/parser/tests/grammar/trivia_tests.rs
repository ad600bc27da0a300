use indoc::indoc;

use crate::parser::tests::{dump, parse};
use crate::printer::TreePrinter;

#[test]
fn comments_attach_to_enclosing_node() {
    let input = indoc! {r#"
    // actors of the system
    actors { /* inline */
      user Buyer // the buyer
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (comment "// actors of the system")
      (actors_block
        (comment "/* inline */")
        (actor_definition
          type: (actor_type)
          name: (actor_name
            (identifier "Buyer")))
        (comment "// the buyer")))
    "#);
}

#[test]
fn crlf_line_endings() {
    let input = "actors {\r\n  user Buyer\r\n}\r\n";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (actors_block
        (actor_definition
          type: (actor_type)
          name: (actor_name
            (identifier "Buyer")))))
    "#);
}

#[test]
fn comment_only_file() {
    let input = "// nothing here\n";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (comment "// nothing here"))
    "#);
}

#[test]
fn raw_dump_keeps_trivia_on_request() {
    let tree = parse("actor user Buyer // me\n");
    insta::assert_snapshot!(TreePrinter::new(&tree).raw(true).dump(), @r#"
    SourceFile
      ActorBlock
        KwActor "actor"
        ActorType
          KwUser "user"
        ActorName
          Id "Buyer"
        Newline "\n"
    "#);
    insta::assert_snapshot!(TreePrinter::new(&tree).raw(true).with_trivia(true).dump(), @r#"
    SourceFile
      ActorBlock
        KwActor "actor"
        Whitespace " "
        ActorType
          KwUser "user"
        Whitespace " "
        ActorName
          Id "Buyer"
        Whitespace " "
        LineComment "// me"
        Newline "\n"
    "#);
}

#[test]
fn tree_text_is_lossless() {
    let input = indoc! {r#"
    // header
    services {
      Api { /* x */ language: rust }
    }

    "#};
    let tree = parse(input);
    assert_eq!(tree.syntax().to_string(), input);
}
