//! Indexed view over the manifest for field and child lookups.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::{FieldDescriptor, NodeTypeInfo};

/// Name-indexed node types with sum kinds pre-expanded to their concrete kinds.
#[derive(Debug, Clone, Default)]
pub struct NodeTypeTable {
    entries: IndexMap<String, NodeTypeInfo>,
    /// Sum kind -> every concrete (product) kind it can stand for.
    concrete: HashMap<String, Vec<String>>,
}

impl NodeTypeTable {
    pub fn new(node_types: &[NodeTypeInfo]) -> Self {
        let entries: IndexMap<String, NodeTypeInfo> = node_types
            .iter()
            .filter(|info| info.named)
            .map(|info| (info.kind.clone(), info.clone()))
            .collect();

        let mut concrete = HashMap::new();
        for info in entries.values().filter(|info| info.is_sum()) {
            let mut out = Vec::new();
            let mut stack = vec![info.kind.as_str()];
            while let Some(kind) = stack.pop() {
                match entries.get(kind) {
                    Some(sub) if sub.is_sum() => {
                        for t in sub.subtypes().iter().rev() {
                            if t.kind != info.kind && !stack.contains(&t.kind.as_str()) {
                                stack.push(&t.kind);
                            }
                        }
                    }
                    _ if kind != info.kind && !out.iter().any(|k| k == kind) => {
                        out.push(kind.to_owned());
                    }
                    _ => {}
                }
            }
            concrete.insert(info.kind.clone(), out);
        }

        Self { entries, concrete }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeTypeInfo> {
        self.entries.values()
    }

    pub fn get(&self, kind: &str) -> Option<&NodeTypeInfo> {
        self.entries.get(kind)
    }

    pub fn is_supertype(&self, kind: &str) -> bool {
        self.concrete.contains_key(kind)
    }

    /// Concrete kinds a sum kind expands to; empty for product kinds.
    pub fn concrete_kinds(&self, kind: &str) -> &[String] {
        self.concrete.get(kind).map_or(&[], Vec::as_slice)
    }

    pub fn field(&self, kind: &str, field: &str) -> Option<&FieldDescriptor> {
        self.get(kind)?.field(field)
    }

    pub fn children(&self, kind: &str) -> Option<&FieldDescriptor> {
        self.get(kind)?.children()
    }

    /// Whether a node of `kind` may fill `slot`, looking through sum kinds.
    pub fn accepts(&self, slot: &FieldDescriptor, kind: &str, named: bool) -> bool {
        slot.types.iter().any(|t| {
            (t.kind == kind && t.named == named)
                || (t.named && named && self.concrete_kinds(&t.kind).iter().any(|k| k == kind))
        })
    }

    /// The field of `parent` that a child of `kind` belongs to, if any.
    pub fn field_for_child(&self, parent: &str, kind: &str, named: bool) -> Option<&str> {
        self.get(parent)?
            .fields()
            .find(|(_, slot)| self.accepts(slot, kind, named))
            .map(|(name, _)| name)
    }
}
