//! Structural diff computation.
//!
//! The core entry point is [`diff`], which compares two [`Tree`]s and returns
//! `None` when they are equal under string-normalized scalar comparison.

use crate::diff::model::{DiffNode, IndexedDiff};
use crate::model::Tree;
use std::collections::{BTreeMap, BTreeSet};

/// Compare two trees.
///
/// - maps: union of keys, missing keys compare as absent
/// - sequences: every index up to the longer length, each reported once
/// - scalars: equal when their string forms match; absent, null and ""
///   are all equal
/// - mismatched shapes (container against scalar, map against sequence)
///   are reported as a change
pub fn diff(a: &Tree, b: &Tree) -> Option<DiffNode> {
    diff_slot(Some(a), Some(b))
}

fn diff_slot(a: Option<&Tree>, b: Option<&Tree>) -> Option<DiffNode> {
    match (a, b) {
        (Some(Tree::Map(left)), Some(Tree::Map(right))) => diff_maps(left, right),
        (Some(Tree::Seq(left)), Some(Tree::Seq(right))) => diff_seqs(left, right),
        _ => {
            if scalar_text(a) == scalar_text(b) && scalar_text(a).is_some() {
                None
            } else {
                Some(DiffNode::changed(a, b))
            }
        }
    }
}

const ABSENT: &Tree = &Tree::Null;

/// Absent counts as null; containers have no scalar form.
fn scalar_text(slot: Option<&Tree>) -> Option<&str> {
    slot.unwrap_or(ABSENT).scalar_text()
}

fn diff_maps(left: &BTreeMap<String, Tree>, right: &BTreeMap<String, Tree>) -> Option<DiffNode> {
    let keys: BTreeSet<&String> = left.keys().chain(right.keys()).collect();
    let entries: BTreeMap<String, DiffNode> = keys
        .into_iter()
        .filter_map(|key| {
            diff_slot(left.get(key), right.get(key)).map(|node| (key.clone(), node))
        })
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(DiffNode::Map(entries))
    }
}

fn diff_seqs(left: &[Tree], right: &[Tree]) -> Option<DiffNode> {
    let len = left.len().max(right.len());
    let entries: Vec<IndexedDiff> = (0..len)
        .filter_map(|index| {
            diff_slot(left.get(index), right.get(index)).map(|diff| IndexedDiff { index, diff })
        })
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(DiffNode::Seq(entries))
    }
}
