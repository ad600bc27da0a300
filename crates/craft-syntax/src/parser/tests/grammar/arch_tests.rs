use indoc::indoc;

use crate::parser::ast::{ArchSection, Item, ModifierValue};
use crate::parser::tests::{dump, parse};

#[test]
fn one_line_flow_with_modifier() {
    let input = "arch { presentation: WebApp > Gateway[timeout:30] }";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (arch_block
        (presentation_section
          (arch_component_list
            (component_flow
              (component_with_modifiers
                name: (component_name
                  (identifier "WebApp")))
              (component_with_modifiers
                name: (component_name
                  (identifier "Gateway"))
                modifiers: (component_modifiers
                  (modifier_list
                    (modifier
                      key: (modifier_key
                        (identifier "timeout"))
                      value: (number "30"))))))))))
    "#);
}

#[test]
fn named_block_with_chained_sections() {
    let input = indoc! {r#"
    arch Shop {
      presentation:
        WebApp
        MobileApp > Api[retries: 3, cached: true,]
      gateway:
        Api
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (arch_block
        name: (identifier "Shop")
        (presentation_section
          (arch_component_list
            (simple_component
              (component_with_modifiers
                name: (component_name
                  (identifier "WebApp"))))
            (arch_continuation
              (arch_component_list
                (component_flow
                  (component_with_modifiers
                    name: (component_name
                      (identifier "MobileApp")))
                  (component_with_modifiers
                    name: (component_name
                      (identifier "Api"))
                    modifiers: (component_modifiers
                      (modifier_list
                        (modifier
                          key: (modifier_key
                            (identifier "retries"))
                          value: (number "3"))
                        (modifier
                          key: (modifier_key
                            (identifier "cached"))
                          value: (boolean))))))
                (arch_continuation
                  (gateway_section
                    (arch_component_list
                      (simple_component
                        (component_with_modifiers
                          name: (component_name
                            (identifier "Api"))))
                      (arch_continuation))))))))))
    "#);
}

#[test]
fn keywords_as_component_names() {
    let input = "arch { gateway: service > domain[to: when] }";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (arch_block
        (gateway_section
          (arch_component_list
            (component_flow
              (component_with_modifiers
                name: (component_name
                  (identifier "service")))
              (component_with_modifiers
                name: (component_name
                  (identifier "domain"))
                modifiers: (component_modifiers
                  (modifier_list
                    (modifier
                      key: (modifier_key
                        (identifier "to"))
                      value: (identifier "when"))))))))))
    "#);
}

#[test]
fn modifier_without_value() {
    let input = "arch { presentation: Cache[readonly] }";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (arch_block
        (presentation_section
          (arch_component_list
            (simple_component
              (component_with_modifiers
                name: (component_name
                  (identifier "Cache"))
                modifiers: (component_modifiers
                  (modifier_list
                    (modifier
                      key: (modifier_key
                        (identifier "readonly")))))))))))
    "#);
}

#[test]
fn long_chain() {
    let input = indoc! {r#"
    arch {
      gateway: Edge > Auth > Router > Backend
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (arch_block
        (gateway_section
          (arch_component_list
            (component_flow
              (component_with_modifiers
                name: (component_name
                  (identifier "Edge")))
              (component_with_modifiers
                name: (component_name
                  (identifier "Auth")))
              (component_with_modifiers
                name: (component_name
                  (identifier "Router")))
              (component_with_modifiers
                name: (component_name
                  (identifier "Backend"))))
            (arch_continuation)))))
    "#);
}

#[test]
fn sections_are_reachable_from_the_block() {
    let input = indoc! {r#"
    arch {
      presentation:
        WebApp
        MobileApp
      gateway:
        Api > Backend
    }
    "#};

    let tree = parse(input);
    let file = tree.source_file();
    let Some(Item::Arch(arch)) = file.items().next() else {
        panic!("expected an arch block");
    };

    let sections: Vec<_> = arch.sections().collect();
    assert_eq!(sections.len(), 2);
    assert!(matches!(sections[0], ArchSection::Presentation(_)));
    assert!(matches!(sections[1], ArchSection::Gateway(_)));

    let names = |section: &ArchSection| -> Vec<String> {
        section
            .components()
            .flat_map(|c| c.components())
            .filter_map(|c| c.name())
            .map(|t| t.text().to_string())
            .collect()
    };
    assert_eq!(names(&sections[0]), ["WebApp", "MobileApp"]);
    assert_eq!(names(&sections[1]), ["Api", "Backend"]);
}

#[test]
fn modifier_values_are_typed() {
    let tree = parse("arch { presentation: Api[port: 8080, tls: false, mode: strict] }");
    let file = tree.source_file();
    let Some(Item::Arch(arch)) = file.items().next() else {
        panic!("expected an arch block");
    };
    let component = arch.sections().next().unwrap().components().next().unwrap();
    let modifiers: Vec<_> = component.components()[0].modifiers().collect();

    assert_eq!(modifiers.len(), 3);
    assert!(matches!(modifiers[0].value(), Some(ModifierValue::Number(t)) if t.text() == "8080"));
    assert!(matches!(modifiers[1].value(), Some(ModifierValue::Boolean(b)) if !b.value()));
    assert!(matches!(modifiers[2].value(), Some(ModifierValue::Identifier(t)) if t.text() == "strict"));
}
