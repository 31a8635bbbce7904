use super::classify::{classify, LayerKind};
use super::pattern::recover_prefix;
use super::types::{Route, RouteSet};
use crate::app::{App, AppHandle, HandlerRef, Layer, RouteEntry};
use tracing::{debug, error, warn};

/// Placeholder recorded for handlers with no resolvable name.
pub const ANONYMOUS_HANDLER: &str = "anonymous";

/// Extract all routes registered on an application handle.
///
/// A [`AppHandle::Factory`] is invoked once; if it fails, the error is diagnosed
/// and the handle is treated as non-extractable, yielding an empty list. Callers
/// can always proceed with whatever comes back.
pub fn extract_routes(handle: &AppHandle) -> Vec<Route> {
    match handle {
        AppHandle::Ready(app) => extract_from_app(app),
        AppHandle::Factory(factory) => match factory() {
            Ok(app) => extract_from_app(&app),
            Err(err) => {
                warn!(error = %err, "application factory failed; treating handle as non-extractable");
                Vec::new()
            }
        },
    }
}

/// Extract all routes from an already-initialized application.
///
/// The walk is depth-first and order-preserving, and never mutates the
/// application. An application with no recognizable routing attachment point
/// yields an empty list plus a diagnostic, not an error.
pub fn extract_from_app(app: &App) -> Vec<Route> {
    let Some(stack) = root_stack(app) else {
        error!("no router stack found on the application handle; is it a real application?");
        return Vec::new();
    };

    let mut routes = RouteSet::new();
    walk_stack(stack, "", &mut routes);

    debug!(route_count = routes.len(), "route extraction complete");
    routes.into_routes()
}

/// Probe the known attachment points in priority order and use the first that
/// holds any layers. Different framework versions expose the routing table under
/// different properties.
fn root_stack(app: &App) -> Option<&[Layer]> {
    if let Some(router) = &app.router {
        if !router.stack.is_empty() {
            return Some(&router.stack);
        }
    }
    if let Some(stack) = &app.stack {
        if !stack.is_empty() {
            return Some(stack);
        }
    }
    if let Some(handle) = &app.handle {
        if !handle.stack.is_empty() {
            return Some(&handle.stack);
        }
    }
    None
}

fn walk_stack(stack: &[Layer], base_path: &str, routes: &mut RouteSet) {
    for layer in stack {
        match classify(layer) {
            LayerKind::Terminal(entry) => collect_route(entry, base_path, routes),
            LayerKind::SubRouter(nested) | LayerKind::MountedApp(nested) => {
                let prefix = mount_prefix(layer, base_path);
                walk_stack(nested, &prefix, routes);
            }
            LayerKind::Unroutable => {}
        }
    }
}

fn collect_route(entry: &RouteEntry, base_path: &str, routes: &mut RouteSet) {
    let full_path = match &entry.path {
        Some(path) => format!("{base_path}{path}"),
        None => base_path.to_string(),
    };
    let middleware = handler_names(&entry.stack);

    if !entry.methods.is_empty() {
        for (method, enabled) in &entry.methods {
            if *enabled {
                routes.add(&full_path, method, &middleware);
            }
        }
    } else if let Some(method) = &entry.method {
        // Older framework versions carry a singular method field.
        routes.add(&full_path, method, &middleware);
    }
}

/// Compute the path prefix a sub-router or mounted-application layer consumes.
///
/// The match-any root matcher consumes nothing. A preserved literal path wins
/// over matcher recovery; when recovery fails too, the prefix is left unchanged.
fn mount_prefix(layer: &Layer, base_path: &str) -> String {
    let mut prefix = base_path.to_string();

    if let Some(matcher) = &layer.regexp {
        if matcher.is_match_any() {
            // root mount, consumes no prefix
        } else if let Some(path) = &layer.path {
            prefix.push_str(path);
        } else if let Some(recovered) = recover_prefix(matcher) {
            prefix.push_str(&recovered);
        } else {
            debug!(
                matcher = matcher.source(),
                base_path, "matcher not reversible and no literal path; prefix unchanged"
            );
        }
    } else if let Some(path) = &layer.path {
        prefix.push_str(path);
    }

    if prefix != "/" && prefix.ends_with('/') {
        prefix.pop();
    }
    prefix
}

fn handler_names(stack: &[HandlerRef]) -> Vec<String> {
    stack
        .iter()
        .map(|handler| {
            handler
                .name
                .clone()
                .unwrap_or_else(|| ANONYMOUS_HANDLER.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{NestedHandle, PathMatcher};
    use std::collections::BTreeMap;

    fn route_entry(path: &str, methods: &[&str]) -> RouteEntry {
        RouteEntry {
            path: Some(path.to_string()),
            methods: methods
                .iter()
                .map(|m| ((*m).to_string(), true))
                .collect::<BTreeMap<_, _>>(),
            method: None,
            stack: Vec::new(),
        }
    }

    #[test]
    fn test_mount_prefix_prefers_literal_path() {
        let layer = Layer {
            path: Some("/api".to_string()),
            regexp: Some(PathMatcher::new("/^\\/garbage$$$/")),
            ..Layer::default()
        };
        assert_eq!(mount_prefix(&layer, ""), "/api");
    }

    #[test]
    fn test_mount_prefix_match_any_adds_nothing() {
        let layer = Layer {
            regexp: Some(PathMatcher::new("/^\\/?(?=\\/|$)/i")),
            ..Layer::default()
        };
        assert_eq!(mount_prefix(&layer, "/api"), "/api");
    }

    #[test]
    fn test_mount_prefix_unrecoverable_leaves_base() {
        let layer = Layer {
            regexp: Some(PathMatcher::new("/^\\/(a|b)$/")),
            ..Layer::default()
        };
        assert_eq!(mount_prefix(&layer, "/api"), "/api");
    }

    #[test]
    fn test_walk_skips_unroutable_layers() {
        let stack = vec![
            Layer {
                name: Some("logger".to_string()),
                ..Layer::default()
            },
            Layer {
                route: Some(route_entry("/ping", &["get"])),
                ..Layer::default()
            },
        ];
        let mut routes = RouteSet::new();
        walk_stack(&stack, "", &mut routes);
        let routes = routes.into_routes();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "/ping");
    }

    #[test]
    fn test_sub_router_without_stack_is_skipped() {
        let stack = vec![Layer {
            name: Some("router".to_string()),
            handle: Some(NestedHandle::default()),
            ..Layer::default()
        }];
        let mut routes = RouteSet::new();
        walk_stack(&stack, "", &mut routes);
        assert!(routes.is_empty());
    }
}
