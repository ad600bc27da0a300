//! Schema generation from the rule set.
//!
//! Follows tree-sitter's `node-types.json` semantics:
//! - A visible rule whose body is a choice of two or more visible symbols is a sum type.
//! - Any other visible rule is a product. Its body is walked to collect field slots and
//!   one aggregated children slot, each with a quantity (`required`, `multiple`).
//! - Hidden rules (`_name`) are inlined at their use sites; hidden tokens contribute nothing.
//! - Anonymous literals are recorded inside fields only.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use indexmap::IndexMap;

use super::{FieldDescriptor, NodeShape, NodeTypeInfo, TypeRef};
use crate::grammar::{Grammar, Rule};

/// Produces one entry per visible rule, in rule definition order.
pub fn generate(grammar: &Grammar) -> Vec<NodeTypeInfo> {
    let generator = Generator {
        rules: grammar
            .rules
            .iter()
            .map(|(name, rule)| (name.as_str(), rule))
            .collect(),
    };

    grammar
        .rules
        .iter()
        .filter(|(name, _)| !Rule::is_hidden_name(name))
        .map(|(name, rule)| generator.node_type(name, rule))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Slot<'g> {
    Children,
    Field(&'g str),
}

#[derive(Debug, Clone)]
struct Quantity {
    required: bool,
    multiple: bool,
    types: BTreeSet<TypeRef>,
}

impl Quantity {
    fn one(type_ref: TypeRef) -> Self {
        Self {
            required: true,
            multiple: false,
            types: BTreeSet::from([type_ref]),
        }
    }
}

impl From<Quantity> for FieldDescriptor {
    fn from(q: Quantity) -> Self {
        Self {
            multiple: q.multiple,
            required: q.required,
            types: q.types.into_iter().collect(),
        }
    }
}

type Slots<'g> = BTreeMap<Slot<'g>, Quantity>;

struct Generator<'g> {
    rules: HashMap<&'g str, &'g Rule>,
}

impl<'g> Generator<'g> {
    fn node_type(&self, name: &str, rule: &'g Rule) -> NodeTypeInfo {
        let shape = match self.sum_subtypes(rule) {
            Some(subtypes) => NodeShape::Sum { subtypes },
            None => self.product(rule),
        };
        NodeTypeInfo {
            kind: name.to_owned(),
            named: true,
            shape,
        }
    }

    fn sum_subtypes(&self, rule: &Rule) -> Option<Vec<TypeRef>> {
        let Rule::Choice(members) = rule.unwrap_prec() else {
            return None;
        };
        if members.len() < 2 {
            return None;
        }

        let mut subtypes = BTreeSet::new();
        for member in members {
            match member {
                Rule::Symbol(name)
                    if !Rule::is_hidden_name(name) && self.rules.contains_key(name.as_str()) =>
                {
                    subtypes.insert(TypeRef::named(name.as_str()));
                }
                _ => return None,
            }
        }
        Some(subtypes.into_iter().collect())
    }

    fn product(&self, rule: &'g Rule) -> NodeShape {
        let mut inlining = Vec::new();
        let slots = self.walk(rule, None, &mut inlining);

        let mut fields = IndexMap::new();
        let mut children = Vec::new();
        for (slot, quantity) in slots {
            match slot {
                Slot::Children => children.push(quantity.into()),
                Slot::Field(name) => {
                    fields.insert(name.to_owned(), quantity.into());
                }
            }
        }
        NodeShape::Product { fields, children }
    }

    fn walk(
        &self,
        rule: &'g Rule,
        field: Option<&'g str>,
        inlining: &mut Vec<&'g str>,
    ) -> Slots<'g> {
        match rule {
            Rule::Blank | Rule::Pattern { .. } => Slots::new(),
            Rule::String(value) => match field {
                Some(name) => {
                    Slots::from([(Slot::Field(name), Quantity::one(TypeRef::anonymous(value)))])
                }
                None => Slots::new(),
            },
            Rule::Symbol(name) => self.walk_symbol(name, field, inlining),
            Rule::Seq(members) => members
                .iter()
                .map(|m| self.walk(m, field, inlining))
                .fold(Slots::new(), merge_seq),
            Rule::Choice(members) => members
                .iter()
                .map(|m| self.walk(m, field, inlining))
                .reduce(merge_choice)
                .unwrap_or_default(),
            Rule::Repeat(content) => {
                let mut slots = self.walk(content, field, inlining);
                for q in slots.values_mut() {
                    q.required = false;
                    q.multiple = true;
                }
                slots
            }
            Rule::Repeat1(content) => {
                let mut slots = self.walk(content, field, inlining);
                for q in slots.values_mut() {
                    q.multiple = true;
                }
                slots
            }
            Rule::Field { name, content } => self.walk(content, Some(name.as_str()), inlining),
            Rule::Prec { content, .. }
            | Rule::PrecLeft { content, .. }
            | Rule::PrecRight { content, .. } => self.walk(content, field, inlining),
        }
    }

    fn walk_symbol(
        &self,
        name: &'g str,
        field: Option<&'g str>,
        inlining: &mut Vec<&'g str>,
    ) -> Slots<'g> {
        if !Rule::is_hidden_name(name) {
            let slot = field.map_or(Slot::Children, Slot::Field);
            return Slots::from([(slot, Quantity::one(TypeRef::named(name)))]);
        }

        let Some(&body) = self.rules.get(name) else {
            return Slots::new();
        };
        if body.is_terminal() || inlining.contains(&name) {
            return Slots::new();
        }

        inlining.push(name);
        let slots = self.walk(body, field, inlining);
        inlining.pop();
        slots
    }
}

/// Sequencing: a slot filled by both sides can hold several nodes.
fn merge_seq<'g>(mut acc: Slots<'g>, next: Slots<'g>) -> Slots<'g> {
    for (slot, q) in next {
        match acc.get_mut(&slot) {
            Some(existing) => {
                existing.required |= q.required;
                existing.multiple = true;
                existing.types.extend(q.types);
            }
            None => {
                acc.insert(slot, q);
            }
        }
    }
    acc
}

/// Alternation: a slot is required only if every branch requires it.
fn merge_choice<'g>(mut acc: Slots<'g>, mut next: Slots<'g>) -> Slots<'g> {
    for (slot, q) in acc.iter_mut() {
        match next.remove(slot) {
            Some(other) => {
                q.required &= other.required;
                q.multiple |= other.multiple;
                q.types.extend(other.types);
            }
            None => q.required = false,
        }
    }
    for (slot, q) in next {
        acc.insert(
            slot,
            Quantity {
                required: false,
                ..q
            },
        );
    }
    acc
}
