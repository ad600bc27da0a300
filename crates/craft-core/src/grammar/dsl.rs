//! Rule builders in the style of tree-sitter's `grammar.js` DSL.

use super::types::Rule;

pub fn blank() -> Rule {
    Rule::Blank
}

pub fn string(value: &str) -> Rule {
    Rule::String(value.to_owned())
}

pub fn pattern(value: &str) -> Rule {
    Rule::Pattern {
        value: value.to_owned(),
        flags: None,
    }
}

pub fn sym(name: &str) -> Rule {
    Rule::Symbol(name.to_owned())
}

pub fn seq(members: impl IntoIterator<Item = Rule>) -> Rule {
    Rule::Seq(members.into_iter().collect())
}

pub fn choice(members: impl IntoIterator<Item = Rule>) -> Rule {
    Rule::Choice(members.into_iter().collect())
}

pub fn repeat(content: Rule) -> Rule {
    Rule::Repeat(Box::new(content))
}

pub fn repeat1(content: Rule) -> Rule {
    Rule::Repeat1(Box::new(content))
}

/// `optional(x)` is sugar for `choice(x, blank)`, exactly as in tree-sitter.
pub fn optional(content: Rule) -> Rule {
    choice([content, blank()])
}

pub fn field(name: &str, content: Rule) -> Rule {
    Rule::Field {
        name: name.to_owned(),
        content: Box::new(content),
    }
}

pub fn prec_left(value: i32, content: Rule) -> Rule {
    Rule::PrecLeft {
        value,
        content: Box::new(content),
    }
}

/// One or more `rule`s separated by `separator`, with an optional trailing separator.
pub fn sep1(rule: Rule, separator: &str) -> Rule {
    seq([
        rule.clone(),
        repeat(seq([string(separator), rule])),
        optional(string(separator)),
    ])
}
