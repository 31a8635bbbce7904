//! # Hierarchy Module
//!
//! Organizes a flat route list into a prefix tree keyed by path segment and
//! renders that tree as indented text.
//!
//! The tree is rebuilt from scratch on every call and never persisted. The root
//! path `/` is special-cased into a reserved `root` slot; parameter segments
//! (`:name`) hold an array of candidate subtrees with first-candidate descent —
//! the same observable behavior the inspected framework's ecosystem settled on.

mod build;
mod print;

pub use build::{build_hierarchy, Hierarchy, HierarchyChild, HierarchyNode};
pub use print::{render_hierarchy, RenderOptions};
