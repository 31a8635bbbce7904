use crate::extract::Route;
use serde::Serialize;
use std::collections::BTreeMap;

/// The top of a rendered path-segment tree.
///
/// Routes registered at `/` live in the reserved `root` slot, bypassing segment
/// splitting; everything else hangs off `children` keyed by first segment.
#[derive(Debug, Default, Serialize)]
pub struct Hierarchy {
    pub root: Vec<Route>,
    pub children: BTreeMap<String, HierarchyChild>,
}

impl Hierarchy {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.children.is_empty()
    }
}

/// One tree node: the routes terminating at this segment plus any deeper
/// segments. A node may carry both.
#[derive(Debug, Default, Serialize)]
pub struct HierarchyNode {
    pub routes: Vec<Route>,
    pub children: BTreeMap<String, HierarchyChild>,
}

/// A child slot in the tree.
///
/// Parameter segments hold an array of candidate subtrees rather than a single
/// node, because the same parameter name can recur across sibling routes with
/// different downstream shapes. Descent always uses the first candidate; the
/// bindings are deliberately not disambiguated.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum HierarchyChild {
    Node(HierarchyNode),
    Candidates(Vec<HierarchyNode>),
}

impl HierarchyChild {
    /// Parameter segments always store candidate arrays; an existing single node
    /// becomes the first candidate, keeping whatever it already held.
    fn ensure_candidates(&mut self) {
        if let HierarchyChild::Node(node) = self {
            let node = std::mem::take(node);
            *self = HierarchyChild::Candidates(vec![node]);
        }
    }

    fn first_candidate_mut(candidates: &mut Vec<HierarchyNode>) -> &mut HierarchyNode {
        if candidates.is_empty() {
            candidates.push(HierarchyNode::default());
        }
        &mut candidates[0]
    }
}

/// Organize routes into a hierarchical structure.
///
/// Routes are sorted by path (ordinal comparison) first, so the shape and the
/// rendered output are independent of input order.
pub fn build_hierarchy(routes: &[Route]) -> Hierarchy {
    let mut hierarchy = Hierarchy::default();

    let mut sorted: Vec<&Route> = routes.iter().collect();
    sorted.sort_by(|a, b| a.path.cmp(&b.path));

    for route in sorted {
        if route.path == "/" {
            hierarchy.root.push(route.clone());
            continue;
        }
        let segments: Vec<&str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
        insert_route(&mut hierarchy.children, &segments, route);
    }

    hierarchy
}

fn insert_route(top: &mut BTreeMap<String, HierarchyChild>, segments: &[&str], route: &Route) {
    let Some((last_segment, inner)) = segments.split_last() else {
        return;
    };

    let mut current = top;
    for segment in inner {
        let is_param = segment.starts_with(':');
        let child = current
            .entry((*segment).to_string())
            .or_insert_with(|| empty_child(is_param));
        if is_param {
            child.ensure_candidates();
        }
        current = match child {
            HierarchyChild::Node(node) => &mut node.children,
            HierarchyChild::Candidates(candidates) => {
                &mut HierarchyChild::first_candidate_mut(candidates).children
            }
        };
    }

    let leaf = current
        .entry((*last_segment).to_string())
        .or_insert_with(|| HierarchyChild::Node(HierarchyNode::default()));
    match leaf {
        HierarchyChild::Node(node) => node.routes.push(route.clone()),
        HierarchyChild::Candidates(candidates) => {
            HierarchyChild::first_candidate_mut(candidates)
                .routes
                .push(route.clone());
        }
    }
}

fn empty_child(is_param: bool) -> HierarchyChild {
    if is_param {
        HierarchyChild::Candidates(vec![HierarchyNode::default()])
    } else {
        HierarchyChild::Node(HierarchyNode::default())
    }
}
