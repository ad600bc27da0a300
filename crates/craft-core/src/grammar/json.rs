//! `grammar.json` (de)serialization.
//!
//! Tree-sitter's grammar.json uses internally-tagged enums with a `type` field.
//! Emitting the same shape lets host tooling regenerate a native parser from the
//! rule set this crate ships.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::{Grammar, GrammarError, Rule};

impl Grammar {
    /// Parse grammar from JSON string.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        Ok(raw.into())
    }

    /// Render as pretty-printed `grammar.json`.
    pub fn to_json(&self) -> String {
        let raw = RawGrammar::from(self);
        serde_json::to_string_pretty(&raw).expect("grammar serialization never fails")
    }
}

/// Raw grammar structure matching tree-sitter's JSON format.
#[derive(Debug, Serialize, Deserialize)]
struct RawGrammar {
    name: String,
    rules: IndexMap<String, RawRule>,
    #[serde(default)]
    extras: Vec<RawRule>,
}

impl From<RawGrammar> for Grammar {
    fn from(raw: RawGrammar) -> Self {
        // IndexMap keeps definition order, so the entry rule stays first.
        Self {
            name: raw.name,
            rules: raw.rules.into_iter().map(|(k, v)| (k, v.into())).collect(),
            extras: raw.extras.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&Grammar> for RawGrammar {
    fn from(grammar: &Grammar) -> Self {
        Self {
            name: grammar.name.clone(),
            rules: grammar
                .rules
                .iter()
                .map(|(k, v)| (k.clone(), v.into()))
                .collect(),
            extras: grammar.extras.iter().map(Into::into).collect(),
        }
    }
}

/// Raw rule matching tree-sitter's JSON format.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
#[allow(clippy::upper_case_acronyms, non_camel_case_types)]
enum RawRule {
    BLANK,
    STRING {
        value: String,
    },
    PATTERN {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flags: Option<String>,
    },
    SYMBOL {
        name: String,
    },
    SEQ {
        members: Vec<RawRule>,
    },
    CHOICE {
        members: Vec<RawRule>,
    },
    REPEAT {
        content: Box<RawRule>,
    },
    REPEAT1 {
        content: Box<RawRule>,
    },
    FIELD {
        name: String,
        content: Box<RawRule>,
    },
    PREC {
        value: i32,
        content: Box<RawRule>,
    },
    PREC_LEFT {
        value: i32,
        content: Box<RawRule>,
    },
    PREC_RIGHT {
        value: i32,
        content: Box<RawRule>,
    },
}

impl From<RawRule> for Rule {
    fn from(raw: RawRule) -> Self {
        #[allow(clippy::boxed_local)] // Fields are Box<RawRule>, output needs Box<Rule>
        fn conv(content: Box<RawRule>) -> Box<Rule> {
            Box::new(Rule::from(*content))
        }

        match raw {
            RawRule::BLANK => Rule::Blank,
            RawRule::STRING { value } => Rule::String(value),
            RawRule::PATTERN { value, flags } => Rule::Pattern { value, flags },
            RawRule::SYMBOL { name } => Rule::Symbol(name),
            RawRule::SEQ { members } => Rule::Seq(members.into_iter().map(Into::into).collect()),
            RawRule::CHOICE { members } => {
                Rule::Choice(members.into_iter().map(Into::into).collect())
            }
            RawRule::REPEAT { content } => Rule::Repeat(conv(content)),
            RawRule::REPEAT1 { content } => Rule::Repeat1(conv(content)),
            RawRule::FIELD { name, content } => Rule::Field {
                name,
                content: conv(content),
            },
            RawRule::PREC { value, content } => Rule::Prec {
                value,
                content: conv(content),
            },
            RawRule::PREC_LEFT { value, content } => Rule::PrecLeft {
                value,
                content: conv(content),
            },
            RawRule::PREC_RIGHT { value, content } => Rule::PrecRight {
                value,
                content: conv(content),
            },
        }
    }
}

impl From<&Rule> for RawRule {
    fn from(rule: &Rule) -> Self {
        fn conv(content: &Rule) -> Box<RawRule> {
            Box::new(RawRule::from(content))
        }

        match rule {
            Rule::Blank => RawRule::BLANK,
            Rule::String(value) => RawRule::STRING {
                value: value.clone(),
            },
            Rule::Pattern { value, flags } => RawRule::PATTERN {
                value: value.clone(),
                flags: flags.clone(),
            },
            Rule::Symbol(name) => RawRule::SYMBOL { name: name.clone() },
            Rule::Seq(members) => RawRule::SEQ {
                members: members.iter().map(Into::into).collect(),
            },
            Rule::Choice(members) => RawRule::CHOICE {
                members: members.iter().map(Into::into).collect(),
            },
            Rule::Repeat(content) => RawRule::REPEAT {
                content: conv(content),
            },
            Rule::Repeat1(content) => RawRule::REPEAT1 {
                content: conv(content),
            },
            Rule::Field { name, content } => RawRule::FIELD {
                name: name.clone(),
                content: conv(content),
            },
            Rule::Prec { value, content } => RawRule::PREC {
                value: *value,
                content: conv(content),
            },
            Rule::PrecLeft { value, content } => RawRule::PREC_LEFT {
                value: *value,
                content: conv(content),
            },
            Rule::PrecRight { value, content } => RawRule::PREC_RIGHT {
                value: *value,
                content: conv(content),
            },
        }
    }
}
