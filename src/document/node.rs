//! Structural view of a parsed document.
//!
//! [`YamlNode`] is a closed set of tagged variants mirroring the logical
//! structure of the source: mappings, sequences, and scalars. Equality is
//! structural only - comments, key order, and indentation in the source
//! never affect it.

use std::collections::BTreeMap;

/// Mapping storage. Keyed by string; iteration order is key order, which
/// keeps structural checks deterministic regardless of source order.
pub type Mapping = BTreeMap<String, YamlNode>;

/// A node in the structural document tree.
///
/// Null scalars render as the empty string, so a bare `version:` key still
/// counts as present for key-presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlNode {
    /// Key/value mapping.
    Mapping(Mapping),
    /// Ordered sequence.
    Sequence(Vec<YamlNode>),
    /// Scalar leaf (string, number, bool, or null), in its string rendering.
    Scalar(String),
}

impl YamlNode {
    /// View this node as a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            YamlNode::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// View this node as a sequence.
    pub fn as_sequence(&self) -> Option<&[YamlNode]> {
        match self {
            YamlNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// View this node as a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            YamlNode::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Key lookup. Defined on mappings only; any other variant has no keys
    /// and yields `None`.
    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Whether this node is a mapping containing `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl From<serde_yaml::Value> for YamlNode {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => YamlNode::Scalar(String::new()),
            Value::Bool(b) => YamlNode::Scalar(b.to_string()),
            Value::Number(n) => YamlNode::Scalar(n.to_string()),
            Value::String(s) => YamlNode::Scalar(s),
            Value::Sequence(items) => {
                YamlNode::Sequence(items.into_iter().map(YamlNode::from).collect())
            }
            Value::Mapping(map) => YamlNode::Mapping(
                map.into_iter()
                    .map(|(k, v)| (key_string(k), YamlNode::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => YamlNode::from(tagged.value),
        }
    }
}

/// Render a mapping key as a string. Compose files only use scalar keys;
/// anything exotic falls back to its YAML rendering.
fn key_string(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match key {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
