//! Structural diff over nested value trees.
//!
//! Compares two [`Tree`](crate::model::Tree)s and produces a minimal
//! [`DiffNode`] holding only the positions that differ. Used to detect drift
//! between two launch configurations.
//!
//! ## Entry point
//!
//! ```
//! use ltikit_core::diff::{diff, render_human_summary};
//! use ltikit_core::model::Tree;
//! use serde_json::json;
//!
//! let a = Tree::from(json!({"launch_url": "https://a", "width": 690}));
//! let b = Tree::from(json!({"launch_url": "https://b", "width": "690"}));
//! let d = diff(&a, &b);
//! assert_eq!(d.as_ref().map(|d| d.change_count()), Some(1));
//! print!("{}", render_human_summary(d.as_ref()));
//! ```
//!
//! ## Guarantees
//!
//! - **Reflexive**: `diff(x, x)` is `None` for every tree.
//! - **Symmetric coverage**: keys and indices from both sides are examined.
//! - **String-normalized leaves**: `1` and `"1"` compare equal; absent, null
//!   and `""` compare equal.
//! - **Both sides kept**: unequal leaves carry `before` and `after`.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::diff;
pub use human_summary::render_human_summary;
pub use model::{DiffNode, IndexedDiff};
