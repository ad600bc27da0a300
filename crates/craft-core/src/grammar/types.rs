//! Grammar type definitions.

use std::collections::{BTreeSet, HashSet};

/// Complete grammar: named rules in definition order plus extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    /// Grammar name (e.g., "craft").
    pub name: String,
    /// Production rules, preserving definition order. The entry rule is first.
    pub rules: Vec<(String, Rule)>,
    /// Extra/trivia nodes (comments, whitespace).
    pub extras: Vec<Rule>,
}

/// Grammar rule variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Epsilon (empty match).
    Blank,
    /// Literal token.
    String(String),
    /// Regex token.
    Pattern { value: String, flags: Option<String> },
    /// Reference to another rule.
    Symbol(String),
    /// Sequence of rules (must match in order).
    Seq(Vec<Rule>),
    /// Alternation (first matching wins).
    Choice(Vec<Rule>),
    /// Zero or more repetitions.
    Repeat(Box<Rule>),
    /// One or more repetitions.
    Repeat1(Box<Rule>),
    /// Named field.
    Field { name: String, content: Box<Rule> },
    /// Precedence.
    Prec { value: i32, content: Box<Rule> },
    /// Left-associative precedence.
    PrecLeft { value: i32, content: Box<Rule> },
    /// Right-associative precedence.
    PrecRight { value: i32, content: Box<Rule> },
}

/// Error while loading or validating a grammar.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grammar `{0}` has no rules")]
    NoRules(String),

    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(String),

    #[error("rule `{rule}` references undefined symbol `{symbol}`")]
    UndefinedSymbol { rule: String, symbol: String },

    #[error("rule `{rule}` contains an empty {combinator}")]
    EmptyCombinator {
        rule: String,
        combinator: &'static str,
    },
}

impl Grammar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            extras: Vec::new(),
        }
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    /// The entry rule (first defined).
    pub fn entry(&self) -> Option<&str> {
        self.rules.first().map(|(n, _)| n.as_str())
    }

    /// Checks that the rule set is closed and structurally sound.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if self.rules.is_empty() {
            return Err(GrammarError::NoRules(self.name.clone()));
        }

        let mut defined = HashSet::with_capacity(self.rules.len());
        for (name, _) in &self.rules {
            if !defined.insert(name.as_str()) {
                return Err(GrammarError::DuplicateRule(name.clone()));
            }
        }

        let bodies = self.rules.iter().map(|(n, r)| (n.as_str(), r));
        let extras = self.extras.iter().map(|r| ("extras", r));
        for (owner, rule) in bodies.chain(extras) {
            let mut result = Ok(());
            rule.visit(&mut |r| {
                if result.is_err() {
                    return;
                }
                match r {
                    Rule::Symbol(symbol) if !defined.contains(symbol.as_str()) => {
                        result = Err(GrammarError::UndefinedSymbol {
                            rule: owner.to_owned(),
                            symbol: symbol.clone(),
                        });
                    }
                    Rule::Seq(members) if members.is_empty() => {
                        result = Err(GrammarError::EmptyCombinator {
                            rule: owner.to_owned(),
                            combinator: "seq",
                        });
                    }
                    Rule::Choice(members) if members.is_empty() => {
                        result = Err(GrammarError::EmptyCombinator {
                            rule: owner.to_owned(),
                            combinator: "choice",
                        });
                    }
                    _ => {}
                }
            });
            result?;
        }

        Ok(())
    }

    /// Distinct field names declared anywhere in the rule set, sorted.
    pub fn field_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        for (_, rule) in &self.rules {
            rule.visit(&mut |r| {
                if let Rule::Field { name, .. } = r {
                    names.insert(name.as_str());
                }
            });
        }
        names
    }

    /// Total number of rule positions across all rule bodies.
    pub fn position_count(&self) -> usize {
        self.rules.iter().map(|(_, r)| r.size()).sum()
    }
}

impl Rule {
    /// Hidden rules start with `_` and never produce their own node.
    pub fn is_hidden_name(name: &str) -> bool {
        name.starts_with('_')
    }

    /// Pre-order traversal over this rule and all nested rules.
    pub fn visit<'r>(&'r self, f: &mut impl FnMut(&'r Rule)) {
        f(self);
        match self {
            Rule::Blank | Rule::String(_) | Rule::Pattern { .. } | Rule::Symbol(_) => {}
            Rule::Seq(members) | Rule::Choice(members) => {
                for member in members {
                    member.visit(f);
                }
            }
            Rule::Repeat(content)
            | Rule::Repeat1(content)
            | Rule::Field { content, .. }
            | Rule::Prec { content, .. }
            | Rule::PrecLeft { content, .. }
            | Rule::PrecRight { content, .. } => content.visit(f),
        }
    }

    /// Number of rule nodes in this tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| count += 1);
        count
    }

    /// True if the rule references no other rule (a pure token).
    pub fn is_terminal(&self) -> bool {
        let mut terminal = true;
        self.visit(&mut |r| {
            if matches!(r, Rule::Symbol(_)) {
                terminal = false;
            }
        });
        terminal
    }

    /// Strips precedence wrappers, which don't affect tree shape.
    pub fn unwrap_prec(&self) -> &Rule {
        match self {
            Rule::Prec { content, .. }
            | Rule::PrecLeft { content, .. }
            | Rule::PrecRight { content, .. } => content.unwrap_prec(),
            other => other,
        }
    }
}
