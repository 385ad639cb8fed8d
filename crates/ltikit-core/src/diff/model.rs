//! Structural diff output types.
//!
//! A [`DiffNode`] mirrors the shape of the compared trees but only holds the
//! positions that differ. Maps use `BTreeMap` and sequence entries are kept in
//! index order, so serialization is deterministic.

use crate::model::Tree;
use serde::Serialize;
use std::collections::BTreeMap;

/// Difference between two trees at one position.
///
/// Serializes without variant tags, so the JSON follows the compared trees:
/// an object of differing keys, an array of `{index, diff}`, or
/// `{before, after}` at a changed leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DiffNode {
    /// Both sides are maps; only differing keys are present
    Map(BTreeMap<String, DiffNode>),
    /// Both sides are sequences; one entry per differing index
    Seq(Vec<IndexedDiff>),
    /// Leaves differ, or the two sides have different shapes.
    ///
    /// `None` means the position is absent on that side.
    Changed {
        before: Option<Tree>,
        after: Option<Tree>,
    },
}

/// A sequence position that differs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedDiff {
    pub index: usize,
    pub diff: DiffNode,
}

impl DiffNode {
    pub fn changed(before: Option<&Tree>, after: Option<&Tree>) -> Self {
        DiffNode::Changed {
            before: before.cloned(),
            after: after.cloned(),
        }
    }

    /// Single-value view of a change: the first side when it is present and
    /// non-null, else the second. Containers have no single value.
    pub fn shown(&self) -> Option<&Tree> {
        match self {
            DiffNode::Changed { before, after } => before
                .as_ref()
                .filter(|t| **t != Tree::Null)
                .or(after.as_ref()),
            _ => None,
        }
    }

    /// Number of changed positions (leaves of the diff tree)
    pub fn change_count(&self) -> usize {
        match self {
            DiffNode::Map(entries) => entries.values().map(DiffNode::change_count).sum(),
            DiffNode::Seq(entries) => entries.iter().map(|e| e.diff.change_count()).sum(),
            DiffNode::Changed { .. } => 1,
        }
    }

    /// Flatten into `(path, before, after)` triples in deterministic order.
    ///
    /// Map keys are joined with `.`; sequence indices render as `[i]`.
    pub fn changes(&self) -> Vec<(String, Option<&Tree>, Option<&Tree>)> {
        let mut out = Vec::new();
        self.collect_changes(String::new(), &mut out);
        out
    }

    fn collect_changes<'a>(
        &'a self,
        path: String,
        out: &mut Vec<(String, Option<&'a Tree>, Option<&'a Tree>)>,
    ) {
        match self {
            DiffNode::Map(entries) => {
                for (key, node) in entries {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", path, key)
                    };
                    node.collect_changes(child, out);
                }
            }
            DiffNode::Seq(entries) => {
                for entry in entries {
                    entry
                        .diff
                        .collect_changes(format!("{}[{}]", path, entry.index), out);
                }
            }
            DiffNode::Changed { before, after } => {
                out.push((path, before.as_ref(), after.as_ref()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_prefers_first_present_side() {
        let both = DiffNode::changed(Some(&Tree::from("a")), Some(&Tree::from("b")));
        assert_eq!(both.shown(), Some(&Tree::from("a")));

        let only_after = DiffNode::changed(None, Some(&Tree::from("b")));
        assert_eq!(only_after.shown(), Some(&Tree::from("b")));

        let null_before = DiffNode::changed(Some(&Tree::Null), Some(&Tree::from("b")));
        assert_eq!(null_before.shown(), Some(&Tree::from("b")));
    }

    #[test]
    fn test_changes_paths() {
        let mut inner = BTreeMap::new();
        inner.insert(
            "launch_url".to_string(),
            DiffNode::changed(Some(&Tree::from("a")), Some(&Tree::from("b"))),
        );
        let node = DiffNode::Map(BTreeMap::from([
            ("course_navigation".to_string(), DiffNode::Map(inner)),
            (
                "tags".to_string(),
                DiffNode::Seq(vec![IndexedDiff {
                    index: 2,
                    diff: DiffNode::changed(None, Some(&Tree::from("x"))),
                }]),
            ),
        ]));

        let paths: Vec<String> = node.changes().into_iter().map(|(p, _, _)| p).collect();
        assert_eq!(paths, vec!["course_navigation.launch_url", "tags[2]"]);
        assert_eq!(node.change_count(), 2);
    }

    #[test]
    fn test_serializes_in_the_shape_of_the_inputs() {
        let a = Tree::from(serde_json::json!({"nav": {"url": "a"}, "tags": ["x", "y"]}));
        let b = Tree::from(serde_json::json!({"nav": {"url": "b"}, "tags": ["x", "z"]}));
        let node = crate::diff::diff(&a, &b).unwrap();

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "nav": {"url": {"before": "a", "after": "b"}},
                "tags": [{"index": 1, "diff": {"before": "y", "after": "z"}}]
            })
        );
    }

    #[test]
    fn test_absent_side_serializes_as_null() {
        let node = DiffNode::changed(Some(&Tree::from("1")), None);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({"before": "1", "after": null}));
    }
}
