use indoc::indoc;

use crate::parser::ast::{ExposureProperty, Item};
use crate::parser::tests::{dump, parse};

#[test]
fn actors_block() {
    let input = "actors { user Customer\nservice Billing }";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (actors_block
        (actor_definition
          type: (actor_type)
          name: (actor_name
            (identifier "Customer")))
        (actor_definition
          type: (actor_type)
          name: (actor_name
            (identifier "Billing")))))
    "#);
}

#[test]
fn actor_block() {
    let input = indoc! {r#"
    actor system Scheduler
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (actor_block
        type: (actor_type)
        name: (actor_name
          (identifier "Scheduler"))))
    "#);
}

#[test]
fn domain_block() {
    let input = indoc! {r#"
    domain Commerce {
      Cart
      Checkout

      Catalog
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (domain_block
        name: (identifier "Commerce")
        (subdomain
          (identifier "Cart"))
        (subdomain
          (identifier "Checkout"))
        (subdomain
          (identifier "Catalog"))))
    "#);
}

#[test]
fn domains_block() {
    let input = indoc! {r#"
    domains {
      Sales { Leads }
      Support {
        Tickets
      }
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (domains_block
        (domain_definition
          name: (identifier "Sales")
          (subdomain
            (identifier "Leads")))
        (domain_definition
          name: (identifier "Support")
          (subdomain
            (identifier "Tickets")))))
    "#);
}

#[test]
fn exposure_block() {
    let input = indoc! {r#"
    exposure Public {
      to: Customer, Partner
      through: Api
      of: Orders
    }
    "#};

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (exposure_block
        name: (identifier "Public")
        (to_property
          (identifier_list
            (identifier "Customer")
            (identifier "Partner")))
        (through_property
          (identifier_list
            (identifier "Api")))
        (of_property
          (identifier_list
            (identifier "Orders")))))
    "#);
}

#[test]
fn actor_definitions_expose_type_and_name() {
    let tree = parse("actors {\n  user Customer\n  system Cron\n}\n");
    let file = tree.source_file();
    let Some(Item::Actors(actors)) = file.items().next() else {
        panic!("expected an actors block");
    };

    let pairs: Vec<(String, String)> = actors
        .definitions()
        .map(|d| {
            (
                d.actor_type().unwrap().text().to_string(),
                d.name().unwrap().text().to_string(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        [
            ("user".to_string(), "Customer".to_string()),
            ("system".to_string(), "Cron".to_string()),
        ]
    );
}

#[test]
fn exposure_properties_list_their_names() {
    let input = indoc! {r#"
    exposure Internal {
      to: Admin, Support,
      of: Billing
    }
    "#};

    let tree = parse(input);
    assert!(!tree.has_errors());
    let file = tree.source_file();
    let Some(Item::Exposure(exposure)) = file.items().next() else {
        panic!("expected an exposure block");
    };
    assert_eq!(exposure.name().unwrap().text(), "Internal");

    let properties: Vec<ExposureProperty> = exposure.properties().collect();
    assert_eq!(properties.len(), 2);
    assert!(matches!(properties[0], ExposureProperty::To(_)));
    let names: Vec<String> = properties[0]
        .names()
        .iter()
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(names, ["Admin", "Support"]);
    assert!(matches!(properties[1], ExposureProperty::Of(_)));
}

#[test]
fn domain_subdomains() {
    let tree = parse("domain Commerce {\n  Cart\n  Checkout\n}\n");
    let file = tree.source_file();
    let Some(Item::Domain(domain)) = file.items().next() else {
        panic!("expected a domain block");
    };
    assert_eq!(domain.name().unwrap().text(), "Commerce");
    let subdomains: Vec<String> = domain
        .subdomains()
        .iter()
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(subdomains, ["Cart", "Checkout"]);
}

#[test]
fn actor_definitions_share_a_line() {
    let input = "actors { user Customer system Billing }";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (actors_block
        (actor_definition
          type: (actor_type)
          name: (actor_name
            (identifier "Customer")))
        (actor_definition
          type: (actor_type)
          name: (actor_name
            (identifier "Billing")))))
    "#);
}

#[test]
fn exposure_properties_share_a_line() {
    let input = "exposure Pub { to: A through: B }";

    assert!(!parse(input).has_errors());
    insta::assert_snapshot!(dump(input), @r#"
    (source_file
      (exposure_block
        name: (identifier "Pub")
        (to_property
          (identifier_list
            (identifier "A")))
        (through_property
          (identifier_list
            (identifier "B")))))
    "#);
}
