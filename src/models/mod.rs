use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Node identifier.
///
/// Hosts hand us either string or numeric ids. Drag payloads only carry
/// strings, so every id is normalised to its string form on the way in and
/// compared as a string afterwards.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

macro_rules! node_id_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for NodeId {
            fn from(n: $t) -> Self {
                Self(n.to_string())
            }
        })*
    };
}

node_id_from_int!(i32, i64, u32, u64, usize);

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => NodeId(s),
            RawId::Int(n) => NodeId(n.to_string()),
            RawId::Float(x) => NodeId(x.to_string()),
        })
    }
}

/// One node of the tree, in the JSON shape hosts already use:
/// `{ "id": .., "name": .., "children": [..] }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TreeNode {
    pub id: NodeId,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,

    /// Host fields we don't interpret. Kept so a move doesn't drop them.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TreeNode {
    pub fn leaf(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn branch(id: impl Into<NodeId>, name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            children: Some(children),
            ..Self::leaf(id, name)
        }
    }

    /// Present and non-empty. An empty `children` list renders like a leaf.
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}
