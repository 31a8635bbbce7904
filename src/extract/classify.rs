use crate::app::{Layer, RouteEntry};

/// Framework tag for a nested sub-router layer.
const SUB_ROUTER_TAG: &str = "router";
/// Framework tag for a mounted sub-application layer.
const MOUNTED_APP_TAG: &str = "bound dispatch";

/// What a routing layer means to the walk, carrying only the fields relevant to
/// each kind.
#[derive(Debug)]
pub enum LayerKind<'a> {
    /// A terminal route definition.
    Terminal(&'a RouteEntry),
    /// A nested sub-router consuming a path prefix.
    SubRouter(&'a [Layer]),
    /// An entire application grafted onto a path prefix.
    MountedApp(&'a [Layer]),
    /// Middleware with no routing semantics; skipped by the walk.
    Unroutable,
}

/// Classify a layer by structural inspection.
///
/// The framework exposes no discriminant, so layer kind is decided by which
/// fields are populated and by the framework's own name tags. Doing this in one
/// place keeps the walk free of shape checks.
pub fn classify(layer: &Layer) -> LayerKind<'_> {
    if let Some(route) = &layer.route {
        return LayerKind::Terminal(route);
    }

    let Some(handle) = &layer.handle else {
        return LayerKind::Unroutable;
    };
    let Some(stack) = handle.stack.as_deref() else {
        return LayerKind::Unroutable;
    };

    match layer.name.as_deref() {
        Some(SUB_ROUTER_TAG) => LayerKind::SubRouter(stack),
        Some(MOUNTED_APP_TAG) => LayerKind::MountedApp(stack),
        // Some framework versions tag the nested handle instead of the layer.
        _ if handle.name.as_deref() == Some(SUB_ROUTER_TAG) => LayerKind::SubRouter(stack),
        _ => LayerKind::Unroutable,
    }
}
