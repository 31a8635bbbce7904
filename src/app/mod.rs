//! # Application Model Module
//!
//! Read-only model of the host framework's internal routing graph.
//!
//! The framework keeps its routing table as a stack of layers, each either a
//! terminal route, a nested sub-router, or a mounted sub-application. Because Rust
//! has no runtime reflection, applications hand routescope either a live [`App`]
//! value (or a factory closure producing one) or a **routing snapshot**: a JSON
//! serialization of the same graph, loadable with [`load_app`].
//!
//! Nothing in this module is ever mutated by the rest of the crate; the extractor
//! is a pure function of these types.

mod load;
mod types;

pub use load::load_app;
pub use types::{App, AppHandle, HandlerRef, Layer, NestedHandle, PathMatcher, RouteEntry, RouterHandle};
