use indoc::indoc;

use crate::parser::ast::{Item, ServiceProperty};
use crate::parser::tests::{dump, parse};

#[test]
fn services_block_with_definitions() {
    let input = indoc! {r#"
    services {
      "Order Service" {
        domains: Orders, Billing,
        language: rust
        data-stores: postgres
        deployment: canary(10% -> canary, 90% -> stable)
      }

      Payments {
        deployment: rolling
      }
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (services_block
        (service_definition
          name: (string "\"Order Service\"")
          (domains_property
            (identifier_list
              (identifier "Orders")
              (identifier "Billing")))
          (language_property
            (identifier "rust"))
          (data_stores_property
            (identifier_list
              (identifier "postgres")))
          (deployment_property
            (deployment_spec
              type: (deployment_type)
              rules: (deployment_rules
                (deployment_rule
                  percentage: (percentage "10%")
                  target: (identifier "canary"))
                (deployment_rule
                  percentage: (percentage "90%")
                  target: (identifier "stable"))))))
        (service_definition
          name: (identifier "Payments")
          (deployment_property
            (deployment_spec
              type: (deployment_type))))))
    "#);
}

#[test]
fn service_block() {
    let input = indoc! {r#"
    service Billing {
      language: go
      domains: Payments
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (service_block
        name: (identifier "Billing")
        (language_property
          (identifier "go"))
        (domains_property
          (identifier_list
            (identifier "Payments")))))
    "#);
}

#[test]
fn one_line_service() {
    let input = "service Api { language: rust }";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (service_block
        name: (identifier "Api")
        (language_property
          (identifier "rust"))))
    "#);
}

#[test]
fn deployment_rules_are_typed() {
    let input = indoc! {r#"
    services {
      Api {
        deployment: blue_green(50% -> blue, 50% -> green,)
      }
    }
    "#};

    let tree = parse(input);
    assert!(!tree.has_errors());
    let file = tree.source_file();
    let Some(Item::Services(services)) = file.items().next() else {
        panic!("expected a services block");
    };
    let definition = services.definitions().next().unwrap();
    assert_eq!(definition.name().unwrap().text(), "Api");

    let Some(ServiceProperty::Deployment(deployment)) = definition.properties().next() else {
        panic!("expected a deployment property");
    };
    let spec = deployment.spec().unwrap();
    assert_eq!(spec.strategy().unwrap().text(), "blue_green");

    let rules: Vec<(String, String)> = spec
        .rules()
        .map(|r| {
            (
                r.percentage().unwrap().text().to_string(),
                r.target().unwrap().text().to_string(),
            )
        })
        .collect();
    assert_eq!(
        rules,
        [
            ("50%".to_string(), "blue".to_string()),
            ("50%".to_string(), "green".to_string()),
        ]
    );
}

#[test]
fn service_properties_share_a_line() {
    let input = "service Pay { language: go deployment: canary }";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (service_block
        name: (identifier "Pay")
        (language_property
          (identifier "go"))
        (deployment_property
          (deployment_spec
            type: (deployment_type)))))
    "#);
}
