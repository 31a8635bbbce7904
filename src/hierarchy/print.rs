use super::build::{Hierarchy, HierarchyChild, HierarchyNode};
use crate::color;
use crate::extract::Route;
use std::collections::BTreeMap;

/// Options for hierarchy rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Wrap method tokens in ANSI colors. The output is byte-identical to the
    /// plain form once the escape sequences are stripped.
    pub use_colors: bool,
}

/// Render a hierarchy as indented tree text.
///
/// Output is deterministic: the reserved `root` slot prints first, then children
/// in ordinal key order, depth-first. An empty hierarchy renders as the single
/// line `No routes found`.
pub fn render_hierarchy(hierarchy: &Hierarchy, options: RenderOptions) -> String {
    if hierarchy.is_empty() {
        return "No routes found".to_string();
    }

    let mut out = String::new();
    if !hierarchy.root.is_empty() {
        push_line(&mut out, 0, true, "root", &hierarchy.root, options);
    }
    let entries: Vec<(&str, &HierarchyChild)> = hierarchy
        .children
        .iter()
        .map(|(key, child)| (key.as_str(), child))
        .collect();
    render_entries(&mut out, &entries, 0, options);
    out
}

fn render_entries(
    out: &mut String,
    entries: &[(&str, &HierarchyChild)],
    level: usize,
    options: RenderOptions,
) {
    let count = entries.len();
    for (index, (key, child)) in entries.iter().enumerate() {
        render_child(out, key, child, level, index + 1 == count, options);
    }
}

fn render_child(
    out: &mut String,
    key: &str,
    child: &HierarchyChild,
    level: usize,
    is_last: bool,
    options: RenderOptions,
) {
    match child {
        HierarchyChild::Node(node) => {
            push_line(out, level, is_last, key, &node.routes, options);
            let entries: Vec<(&str, &HierarchyChild)> = node
                .children
                .iter()
                .map(|(k, c)| (k.as_str(), c))
                .collect();
            render_entries(out, &entries, level + 1, options);
        }
        HierarchyChild::Candidates(candidates) => {
            let routes: Vec<Route> = candidates
                .iter()
                .flat_map(|c| c.routes.iter().cloned())
                .collect();
            push_line(out, level, is_last, key, &routes, options);
            // Union of the candidates' children; the first candidate wins on
            // key collisions.
            let mut merged: BTreeMap<&str, &HierarchyChild> = BTreeMap::new();
            for candidate in candidates {
                for (k, c) in &candidate.children {
                    merged.entry(k.as_str()).or_insert(c);
                }
            }
            let entries: Vec<(&str, &HierarchyChild)> = merged.into_iter().collect();
            render_entries(out, &entries, level + 1, options);
        }
    }
}

fn push_line(
    out: &mut String,
    level: usize,
    is_last: bool,
    key: &str,
    routes: &[Route],
    options: RenderOptions,
) {
    out.push_str(&line_prefix(level, is_last));
    out.push_str(key);

    let methods = merged_methods(routes);
    if !methods.is_empty() {
        out.push_str(" [");
        if options.use_colors {
            out.push_str(&color::colorize_methods(&methods));
        } else {
            out.push_str(&methods.join(", "));
        }
        out.push(']');
    }
    out.push('\n');
}

/// Tree-drawing prefix for one line: top-level keys are flush left, deeper
/// levels get a continuation column per level and a branch marker.
fn line_prefix(level: usize, is_last: bool) -> String {
    if level == 0 {
        return String::new();
    }
    let mut prefix = "│ ".repeat(level - 1);
    prefix.push_str(if is_last { "└─ " } else { "├─ " });
    prefix
}

/// Sorted union of the methods on every route attached to a node.
fn merged_methods(routes: &[Route]) -> Vec<String> {
    let mut methods: Vec<String> = Vec::new();
    for route in routes {
        for method in &route.methods {
            if !methods.contains(method) {
                methods.push(method.clone());
            }
        }
    }
    methods.sort();
    methods
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_prefix_levels() {
        assert_eq!(line_prefix(0, false), "");
        assert_eq!(line_prefix(1, false), "├─ ");
        assert_eq!(line_prefix(1, true), "└─ ");
        assert_eq!(line_prefix(3, false), "│ │ ├─ ");
    }

    #[test]
    fn test_merged_methods_sorted_and_deduplicated() {
        let routes = vec![
            Route {
                path: "/a".into(),
                methods: vec!["POST".into(), "GET".into()],
                middleware: vec![],
            },
            Route {
                path: "/a".into(),
                methods: vec!["GET".into(), "DELETE".into()],
                middleware: vec![],
            },
        ];
        assert_eq!(merged_methods(&routes), vec!["DELETE", "GET", "POST"]);
    }

    #[test]
    fn test_empty_hierarchy_renders_notice() {
        let hierarchy = Hierarchy::default();
        assert_eq!(
            render_hierarchy(&hierarchy, RenderOptions::default()),
            "No routes found"
        );
    }
}
