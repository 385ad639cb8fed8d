//! Heterogeneous nested value tree shared by custom-field handling and diffing.

use crate::errors::Result;
use crate::model::{CustomFieldMap, CustomFieldValue};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Scalars are held in their canonical string form so that numeric `1` and
/// text `"1"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tree {
    Null,
    Leaf(String),
    Seq(Vec<Tree>),
    Map(BTreeMap<String, Tree>),
}

impl Tree {
    /// Build a tree from any serializable value via its JSON form
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Tree> {
        Ok(Tree::from(&serde_json::to_value(value)?))
    }

    /// String form used for scalar comparison; absent and null render as ""
    pub fn scalar_text(&self) -> Option<&str> {
        match self {
            Tree::Null => Some(""),
            Tree::Leaf(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Tree::Null => Value::Null,
            Tree::Leaf(s) => Value::String(s.clone()),
            Tree::Seq(items) => Value::Array(items.iter().map(Tree::to_json).collect()),
            Tree::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for Tree {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Tree::Null,
            Value::Bool(b) => Tree::Leaf(b.to_string()),
            Value::Number(n) => Tree::Leaf(n.to_string()),
            Value::String(s) => Tree::Leaf(s.clone()),
            Value::Array(items) => Tree::Seq(items.iter().map(Tree::from).collect()),
            Value::Object(map) => Tree::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Tree::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Tree {
    fn from(value: Value) -> Self {
        Tree::from(&value)
    }
}

impl From<&str> for Tree {
    fn from(s: &str) -> Self {
        Tree::Leaf(s.to_string())
    }
}

impl From<&CustomFieldMap> for Tree {
    fn from(map: &CustomFieldMap) -> Self {
        Tree::Map(
            map.iter()
                .map(|(k, v)| {
                    let node = match v {
                        CustomFieldValue::Text(t) => Tree::Leaf(t.clone()),
                        CustomFieldValue::Group(g) => Tree::from(g),
                    };
                    (k.clone(), node)
                })
                .collect(),
        )
    }
}
