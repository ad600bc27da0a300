//! Node-type schema: the `node-types.json` manifest.
//!
//! Each entry describes one node kind, either as a sum (a kind whose only content is
//! one of several other kinds) or as a product (named fields plus positional children).
//! The manifest is derived from the rule set by [`generate`], never from parse results.

mod generate;
mod table;


use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use generate::generate;
pub use table::NodeTypeTable;

/// Reference to a node kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub named: bool,
}

impl TypeRef {
    pub fn named(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            named: true,
        }
    }

    pub fn anonymous(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            named: false,
        }
    }
}

/// Multiplicity and allowed kinds of a field or children slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub multiple: bool,
    pub required: bool,
    pub types: Vec<TypeRef>,
}

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub named: bool,
    #[serde(flatten)]
    pub shape: NodeShape,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeShape {
    Sum {
        subtypes: Vec<TypeRef>,
    },
    Product {
        #[serde(default)]
        fields: IndexMap<String, FieldDescriptor>,
        /// At most one aggregated descriptor.
        #[serde(default)]
        children: Vec<FieldDescriptor>,
    },
}

impl NodeTypeInfo {
    pub fn is_sum(&self) -> bool {
        matches!(self.shape, NodeShape::Sum { .. })
    }

    pub fn subtypes(&self) -> &[TypeRef] {
        match &self.shape {
            NodeShape::Sum { subtypes } => subtypes,
            NodeShape::Product { .. } => &[],
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        match &self.shape {
            NodeShape::Product { fields, .. } => fields.get(name),
            NodeShape::Sum { .. } => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        let fields = match &self.shape {
            NodeShape::Product { fields, .. } => Some(fields),
            NodeShape::Sum { .. } => None,
        };
        fields
            .into_iter()
            .flat_map(|f| f.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn children(&self) -> Option<&FieldDescriptor> {
        match &self.shape {
            NodeShape::Product { children, .. } => children.first(),
            NodeShape::Sum { .. } => None,
        }
    }
}

/// Renders the manifest in `node-types.json` wire shape.
pub fn to_json(node_types: &[NodeTypeInfo]) -> String {
    serde_json::to_string_pretty(node_types).expect("node types serialization never fails")
}

/// Single-line variant of [`to_json`].
pub fn to_json_compact(node_types: &[NodeTypeInfo]) -> String {
    serde_json::to_string(node_types).expect("node types serialization never fails")
}

/// Parses `node-types.json` content.
pub fn from_json(json: &str) -> Result<Vec<NodeTypeInfo>, serde_json::Error> {
    serde_json::from_str(json)
}
