//! Human-readable summary renderer for structural diffs.

use crate::diff::model::DiffNode;
use crate::model::Tree;

/// Render a line-per-path summary of a diff (`path: before -> after`).
///
/// Absent sides render as `(absent)`, containers as compact JSON. `None`
/// renders a single "no differences" line.
pub fn render_human_summary(diff: Option<&DiffNode>) -> String {
    let Some(diff) = diff else {
        return "No differences.\n".to_string();
    };

    let mut out = format!("{} change(s):\n", diff.change_count());
    for (path, before, after) in diff.changes() {
        let path = if path.is_empty() { "(root)" } else { path.as_str() };
        out.push_str(&format!("  {}: {} -> {}\n", path, side(before), side(after)));
    }
    out
}

fn side(value: Option<&Tree>) -> String {
    match value {
        None => "(absent)".to_string(),
        Some(Tree::Null) => "null".to_string(),
        Some(Tree::Leaf(s)) => format!("{:?}", s),
        Some(container) => container.to_json().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::diff;
    use serde_json::json;

    #[test]
    fn test_no_differences() {
        assert_eq!(render_human_summary(None), "No differences.\n");
    }

    #[test]
    fn test_lines_per_path() {
        let a = Tree::from(json!({"name": "Old", "course_navigation": {"link_text": "A"}}));
        let b = Tree::from(json!({"name": "New", "course_navigation": {}}));
        let d = diff(&a, &b);

        let summary = render_human_summary(d.as_ref());
        assert_eq!(
            summary,
            "2 change(s):\n  course_navigation.link_text: \"A\" -> (absent)\n  name: \"Old\" -> \"New\"\n"
        );
    }

    #[test]
    fn test_root_scalar_change() {
        let d = diff(&Tree::from("a"), &Tree::from("b"));
        assert_eq!(
            render_human_summary(d.as_ref()),
            "1 change(s):\n  (root): \"a\" -> \"b\"\n"
        );
    }
}
