//! # Extraction Module
//!
//! The route extraction and normalization engine.
//!
//! [`extract_routes`] walks the host application's routing graph depth-first and
//! produces a flat, deduplicated list of [`Route`] records. The walk is a pure,
//! read-only transformation: it never mutates its input and never fails — an
//! unrecognizable handle or a failing application factory yields an empty list
//! plus a `tracing` diagnostic.
//!
//! Three concerns with real teeth live here:
//!
//! - [`classify`] resolves each polymorphic layer into an explicit
//!   [`LayerKind`] variant at one boundary, instead of scattering shape checks
//!   through the walk.
//! - [`recover_prefix`] reverse-engineers a literal path prefix from a layer's
//!   serialized compiled matcher, via a fixed rule table with one named
//!   special case for the framework's match-any root matcher.
//! - [`RouteSet`] merges registrations that normalize to the same path, unioning
//!   methods and handler names.

mod classify;
mod core;
mod pattern;
mod types;

pub use classify::{classify, LayerKind};
pub use core::{extract_from_app, extract_routes, ANONYMOUS_HANDLER};
pub use pattern::recover_prefix;
pub use types::{Route, RouteSet};
