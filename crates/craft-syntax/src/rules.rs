//! The Craft rule set.
//!
//! This is the single description of the language's node structure: the node-type
//! manifest is generated from it, and `craft grammar` exports it as `grammar.json`
//! so a native tree-sitter parser can be built from the same definitions. The
//! hand-written parser in [`crate::parser`] produces trees that conform to it.
//!
//! Rules are listed in definition order; `source_file` comes first and is the entry.

use craft_core::Grammar;
use craft_core::grammar::dsl::*;
use craft_core::grammar::Rule;

/// Connector words: articles and prepositions that glue a phrase together.
pub const CONNECTOR_WORDS: [&str; 13] = [
    "a", "an", "the", "as", "to", "from", "in", "on", "at", "for", "with", "by", "of",
];

fn nl() -> Rule {
    sym("_newline")
}

fn newlines() -> Rule {
    repeat(nl())
}

/// `'{' newline* (item newline*)* '}'`
fn braced(item: Rule) -> Rule {
    seq([
        string("{"),
        newlines(),
        repeat(seq([item, newlines()])),
        string("}"),
    ])
}

fn property(keyword: &str, value: Rule) -> Rule {
    seq([string(keyword), string(":"), value])
}

fn section(keyword: &str) -> Rule {
    seq([
        string(keyword),
        string(":"),
        newlines(),
        sym("arch_component_list"),
    ])
}

pub fn craft_grammar() -> Grammar {
    let mut g = Grammar::new("craft");
    let mut rule = |name: &str, body: Rule| g.rules.push((name.to_owned(), body));

    rule("source_file", seq([newlines(), repeat(sym("_top_level_item"))]));
    rule(
        "_top_level_item",
        choice([
            sym("arch_block"),
            sym("services_block"),
            sym("service_block"),
            sym("domain_block"),
            sym("domains_block"),
            sym("actors_block"),
            sym("actor_block"),
            sym("exposure_block"),
            sym("use_case_block"),
        ]),
    );

    // Architecture layers
    rule(
        "arch_block",
        seq([
            string("arch"),
            optional(field("name", sym("identifier"))),
            string("{"),
            newlines(),
            sym("arch_section"),
            string("}"),
            newlines(),
        ]),
    );
    rule(
        "arch_section",
        choice([sym("presentation_section"), sym("gateway_section")]),
    );
    rule(
        "arch_continuation",
        choice([
            seq([repeat1(nl()), sym("arch_section")]),
            seq([repeat1(nl()), sym("arch_component_list")]),
            repeat1(nl()),
        ]),
    );
    rule("presentation_section", section("presentation"));
    rule("gateway_section", section("gateway"));
    rule(
        "arch_component_list",
        prec_left(
            0,
            seq([sym("arch_component"), optional(sym("arch_continuation"))]),
        ),
    );
    rule(
        "arch_component",
        choice([sym("simple_component"), sym("component_flow")]),
    );
    rule(
        "component_flow",
        seq([
            sym("component_with_modifiers"),
            repeat1(seq([string(">"), sym("component_with_modifiers")])),
        ]),
    );
    rule(
        "component_with_modifiers",
        seq([
            field("name", sym("component_name")),
            optional(field("modifiers", sym("component_modifiers"))),
        ]),
    );
    rule("component_name", sym("identifier"));
    rule(
        "component_modifiers",
        seq([string("["), sym("modifier_list"), string("]")]),
    );
    rule("modifier_list", sep1(sym("modifier"), ","));
    rule(
        "modifier",
        seq([
            field("key", sym("modifier_key")),
            optional(seq([string(":"), field("value", sym("modifier_value"))])),
        ]),
    );
    rule("modifier_key", sym("identifier"));
    rule(
        "modifier_value",
        choice([sym("identifier"), sym("number"), sym("boolean")]),
    );
    rule("simple_component", sym("component_with_modifiers"));

    // Services
    rule(
        "services_block",
        seq([
            string("services"),
            braced(sym("service_definition")),
            newlines(),
        ]),
    );
    rule(
        "service_block",
        seq([
            string("service"),
            field("name", sym("identifier")),
            braced(sym("service_property")),
            newlines(),
        ]),
    );
    rule(
        "service_definition",
        seq([
            field("name", choice([sym("string"), sym("identifier")])),
            braced(sym("service_property")),
        ]),
    );
    rule(
        "service_property",
        choice([
            sym("domains_property"),
            sym("language_property"),
            sym("data_stores_property"),
            sym("deployment_property"),
        ]),
    );
    rule("domains_property", property("domains", sym("identifier_list")));
    rule("language_property", property("language", sym("identifier")));
    rule(
        "data_stores_property",
        property("data-stores", sym("identifier_list")),
    );
    rule(
        "deployment_property",
        property("deployment", sym("deployment_spec")),
    );
    rule(
        "deployment_spec",
        seq([
            field("type", sym("deployment_type")),
            optional(field("rules", sym("deployment_rules"))),
        ]),
    );
    rule(
        "deployment_type",
        choice([string("canary"), string("blue_green"), string("rolling")]),
    );
    rule(
        "deployment_rules",
        seq([
            string("("),
            sep1(sym("deployment_rule"), ","),
            string(")"),
        ]),
    );
    rule(
        "deployment_rule",
        seq([
            field("percentage", sym("percentage")),
            string("->"),
            field("target", sym("identifier")),
        ]),
    );

    // Domains
    rule(
        "domain_block",
        seq([
            string("domain"),
            field("name", sym("identifier")),
            braced(sym("subdomain")),
            newlines(),
        ]),
    );
    rule(
        "domains_block",
        seq([
            string("domains"),
            braced(sym("domain_definition")),
            newlines(),
        ]),
    );
    rule(
        "domain_definition",
        seq([
            field("name", sym("identifier")),
            braced(sym("subdomain")),
        ]),
    );
    rule("subdomain", sym("identifier"));

    // Actors
    rule(
        "actor_block",
        seq([
            string("actor"),
            field("type", sym("actor_type")),
            field("name", sym("actor_name")),
            newlines(),
        ]),
    );
    rule(
        "actors_block",
        seq([
            string("actors"),
            braced(sym("actor_definition")),
            newlines(),
        ]),
    );
    rule(
        "actor_definition",
        seq([
            field("type", sym("actor_type")),
            field("name", sym("actor_name")),
        ]),
    );
    rule(
        "actor_type",
        choice([string("user"), string("system"), string("service")]),
    );
    rule("actor_name", sym("identifier"));

    // Exposure
    rule(
        "exposure_block",
        seq([
            string("exposure"),
            field("name", sym("identifier")),
            braced(sym("exposure_property")),
            newlines(),
        ]),
    );
    rule(
        "exposure_property",
        choice([
            sym("to_property"),
            sym("through_property"),
            sym("of_property"),
        ]),
    );
    rule("to_property", property("to", sym("identifier_list")));
    rule("through_property", property("through", sym("identifier_list")));
    rule("of_property", property("of", sym("identifier_list")));

    // Use cases
    rule(
        "use_case_block",
        seq([
            string("use_case"),
            field("name", sym("string")),
            string("{"),
            newlines(),
            sym("scenario"),
            string("}"),
            newlines(),
        ]),
    );
    rule(
        "scenario",
        seq([sym("when_clause"), optional(sym("scenario_continuation"))]),
    );
    rule(
        "scenario_continuation",
        choice([
            seq([newlines(), sym("scenario")]),
            seq([
                repeat1(nl()),
                sym("action"),
                optional(sym("scenario_continuation")),
            ]),
            repeat1(nl()),
        ]),
    );
    rule(
        "when_clause",
        seq([
            string("when"),
            choice([
                sym("external_trigger"),
                sym("event_trigger"),
                sym("domain_listener"),
                sym("cron_trigger"),
            ]),
            nl(),
            repeat(seq([sym("action"), nl()])),
        ]),
    );
    rule(
        "external_trigger",
        prec_left(
            2,
            seq([
                field("actor", sym("trigger_actor")),
                field("verb", sym("trigger_verb")),
                optional(field("connector", sym("connector_word"))),
                optional(field("phrase", sym("phrase"))),
            ]),
        ),
    );
    rule("trigger_actor", sym("identifier"));
    rule("trigger_verb", sym("identifier"));
    rule("event_trigger", sym("string"));
    rule(
        "domain_listener",
        seq([
            field("domain", sym("identifier")),
            string("listens"),
            field("event", sym("string")),
        ]),
    );
    rule(
        "cron_trigger",
        prec_left(0, seq([string("CRON"), optional(sym("phrase"))])),
    );
    rule(
        "action",
        choice([
            sym("sync_action"),
            sym("async_action"),
            sym("internal_action"),
            sym("return_action"),
        ]),
    );
    rule(
        "sync_action",
        prec_left(
            2,
            seq([
                field("subject", sym("action_subject")),
                string("asks"),
                field("target", sym("action_target")),
                optional(field("connector", sym("connector_word"))),
                field("phrase", sym("phrase")),
            ]),
        ),
    );
    rule(
        "async_action",
        seq([
            field("subject", sym("action_subject")),
            string("notifies"),
            field("event", sym("string")),
        ]),
    );
    rule(
        "internal_action",
        prec_left(
            1,
            seq([
                field("subject", sym("action_subject")),
                field("verb", sym("action_verb")),
                optional(field("connector", sym("connector_word"))),
                field("phrase", sym("phrase")),
            ]),
        ),
    );
    rule(
        "return_action",
        prec_left(
            2,
            seq([
                field("subject", sym("action_subject")),
                string("returns"),
                optional(seq([string("to"), field("target", sym("action_target"))])),
                optional(field("connector", sym("connector_word"))),
                field("phrase", sym("phrase")),
            ]),
        ),
    );
    rule("action_subject", sym("identifier"));
    rule("action_target", sym("identifier"));
    rule("action_verb", sym("identifier"));
    rule(
        "connector_word",
        choice(CONNECTOR_WORDS.iter().map(|w| string(w))),
    );
    rule(
        "phrase",
        prec_left(
            1,
            repeat1(choice([
                sym("identifier"),
                sym("string"),
                sym("connector_word"),
            ])),
        ),
    );

    // Shared terminals
    rule("identifier_list", sep1(sym("identifier"), ","));
    rule("identifier", pattern(r"[a-zA-Z_][a-zA-Z0-9_\-]*"));
    rule("string", pattern(r#""([^"\\]|\\(.|\n))*""#));
    rule("number", pattern(r"\d+"));
    rule("percentage", pattern(r"\d+%"));
    rule("boolean", choice([string("true"), string("false")]));
    rule(
        "comment",
        choice([
            pattern(r"//[^\r\n]*"),
            pattern(r"/\*[^*]*\*+([^/*][^*]*\*+)*/"),
        ]),
    );
    rule("_newline", pattern(r"\r?\n"));

    g.extras = vec![pattern(r"[ \t]"), sym("comment")];
    g
}
