use serde::{Deserialize, Serialize};

/// One extracted endpoint: a normalized path template plus every HTTP method and
/// handler name registered against it.
///
/// Paths use `:name` for parameters; the root is exactly `/` and no other path
/// carries a trailing slash. Within one extraction run at most one `Route` exists
/// per normalized path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    /// Uppercase method tokens, deduplicated. Insertion order is preserved but
    /// carries no meaning; renderers sort.
    pub methods: Vec<String>,
    /// Handler names in registration order, duplicates suppressed.
    pub middleware: Vec<String>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: Vec::new(),
            middleware: Vec::new(),
        }
    }
}

/// Accumulates routes during a walk, merging registrations that normalize to the
/// same path.
#[derive(Debug, Default)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a registration. The path is normalized (one trailing separator
    /// stripped unless the path is exactly the root), the method is uppercased and
    /// added to the record's set, and unseen handler names are appended.
    pub fn add(&mut self, path: &str, method: &str, middleware: &[String]) {
        let normalized = normalize_path(path);
        let method = method.to_ascii_uppercase();

        if let Some(existing) = self.routes.iter_mut().find(|r| r.path == normalized) {
            if !existing.methods.contains(&method) {
                existing.methods.push(method);
            }
            for name in middleware {
                if !existing.middleware.contains(name) {
                    existing.middleware.push(name.clone());
                }
            }
        } else {
            self.routes.push(Route {
                path: normalized,
                methods: vec![method],
                middleware: middleware.to_vec(),
            });
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[must_use]
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}

fn normalize_path(path: &str) -> String {
    if path != "/" && path.ends_with('/') {
        path[..path.len() - 1].to_string()
    } else {
        path.to_string()
    }
}
