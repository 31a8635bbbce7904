use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Serialized form of a compiled path matcher.
///
/// The framework reports matchers in `/pattern/flags` form, e.g.
/// `/^\/api\/?(?=\/|$)/i` for a router mounted at `/api`. The matcher is never
/// executed here; the extractor only reverse-engineers a literal prefix from this
/// text (see [`crate::extract`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathMatcher(String);

/// Known serializations of the framework's "match any remaining path" root
/// matcher. Some framework versions omit the optional-slash marker.
const MATCH_ANY_BODIES: [&str; 2] = ["^\\/?(?=\\/|$)", "^\\/(?=\\/|$)"];

impl PathMatcher {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The full serialized form, delimiters and flags included.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.0
    }

    /// The pattern body with the enclosing delimiters and any flag suffix removed.
    #[must_use]
    pub fn body(&self) -> &str {
        let Some(rest) = self.0.strip_prefix('/') else {
            return &self.0;
        };
        match rest.rfind('/') {
            Some(idx) => &rest[..idx],
            None => rest,
        }
    }

    /// Whether this is the root matcher that matches any remaining path. Such a
    /// layer consumes no path prefix at all.
    #[must_use]
    pub fn is_match_any(&self) -> bool {
        MATCH_ANY_BODIES.contains(&self.body())
    }
}

impl From<&str> for PathMatcher {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for PathMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference to one handler function in a route's handler chain. The name is
/// absent for anonymous closures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerRef {
    pub name: Option<String>,
}

impl HandlerRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// An anonymous handler with no resolvable name.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { name: None }
    }
}

/// A terminal route definition: the path template (absent means "matches here"),
/// the registered methods, and the handler chain.
///
/// Modern framework versions flag methods in the `methods` map; older versions
/// carry a singular `method` field instead. Both shapes are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteEntry {
    pub path: Option<String>,
    pub methods: BTreeMap<String, bool>,
    pub method: Option<String>,
    pub stack: Vec<HandlerRef>,
}

/// The nested handle a sub-router or mounted-application layer carries: its own
/// layer stack, and sometimes a name tag of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedHandle {
    pub name: Option<String>,
    pub stack: Option<Vec<Layer>>,
}

/// One node of the framework's routing graph.
///
/// A layer is polymorphic: the populated fields decide whether it is a terminal
/// route, a nested router, a mounted application, or plain middleware with no
/// routing semantics. [`crate::extract::classify`] resolves that ambiguity at one
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer {
    /// Framework tag: `"router"` for sub-routers, `"bound dispatch"` for mounted
    /// applications, otherwise the middleware function name.
    pub name: Option<String>,
    /// Literal mount path, when the framework preserves it.
    pub path: Option<String>,
    /// Compiled matcher for the prefix this layer consumes.
    pub regexp: Option<PathMatcher>,
    /// Terminal route definition.
    pub route: Option<RouteEntry>,
    /// Nested layer stack for sub-routers and mounted applications.
    pub handle: Option<NestedHandle>,
}

/// A named attachment point holding a layer stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterHandle {
    pub stack: Vec<Layer>,
}

/// The host application, as the framework exposes it.
///
/// Different framework versions hang the routing table off different properties;
/// the extractor probes `router.stack`, then `stack`, then `handle.stack`, using
/// the first that holds any layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    pub router: Option<RouterHandle>,
    pub stack: Option<Vec<Layer>>,
    pub handle: Option<RouterHandle>,
}

/// Factory producing the real application when invoked with no arguments.
pub type AppFactory = Box<dyn Fn() -> anyhow::Result<App> + Send + Sync>;

/// What callers hand to the extractor: either an application value, or an
/// uninitialized factory the extractor invokes once per run. A failing factory is
/// diagnosed and treated as a dead end, never propagated.
pub enum AppHandle {
    Ready(App),
    Factory(AppFactory),
}

impl AppHandle {
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn() -> anyhow::Result<App> + Send + Sync + 'static,
    {
        Self::Factory(Box::new(f))
    }
}

impl From<App> for AppHandle {
    fn from(app: App) -> Self {
        Self::Ready(app)
    }
}

impl fmt::Debug for AppHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(app) => f.debug_tuple("Ready").field(app).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}
