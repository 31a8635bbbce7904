//! # routescope
//!
//! **routescope** inspects a web application's internal router, extracts the set of
//! registered endpoints (path + HTTP methods + handler names), and renders that set
//! as a terminal tree, a JSON document, or an interactive web diagram.
//!
//! ## Overview
//!
//! The targeted framework keeps its routing table as a graph of *layers*: terminal
//! routes, nested sub-routers, and mounted sub-applications, each guarding a path
//! prefix with a compiled matcher. routescope walks that graph read-only, recovers
//! human-meaningful path templates from the compiled matchers, merges registrations
//! that share a path, and builds a prefix tree suitable for rendering.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`app`]** - Read-only model of the host framework's routing graph, plus
//!   routing-snapshot loading
//! - **[`extract`]** - The route extraction and normalization engine
//! - **[`hierarchy`]** - Prefix-tree construction and indented-tree rendering
//! - **[`filter`]** - Substring/regex route exclusion
//! - **[`diagram`]** - Full text diagrams and diagram file output
//! - **[`color`]** - Terminal color table for HTTP methods
//! - **[`server`]** - HTTP service exposing the web diagram and JSON data endpoints
//! - **[`cli`]** - The `routescope` command-line interface
//!
//! ## Quick Start
//!
//! ```no_run
//! use routescope::{build_hierarchy, extract_routes, load_app, render_hierarchy};
//! use routescope::{AppHandle, RenderOptions};
//!
//! // Load a routing snapshot exported by the application under inspection
//! let app = load_app("snapshot.json").expect("failed to load snapshot");
//!
//! // Extract the flat, deduplicated route list
//! let routes = extract_routes(&AppHandle::Ready(app));
//!
//! // Organize and render
//! let hierarchy = build_hierarchy(&routes);
//! println!("{}", render_hierarchy(&hierarchy, RenderOptions::default()));
//! ```
//!
//! ## Failure Model
//!
//! Extraction never fails: an unrecognizable application handle, a failing
//! application factory, or an irreversible path matcher degrade to smaller (or
//! empty) results with diagnostics emitted through `tracing`. Only the outer
//! collaborators (CLI, file writer) surface errors to an end user.

pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod diagram;
pub mod extract;
pub mod filter;
pub mod hierarchy;
pub mod server;

pub use app::{load_app, App, AppHandle, HandlerRef, Layer, NestedHandle, PathMatcher, RouteEntry};
pub use config::DiagramConfig;
pub use diagram::{generate_text_diagram, print_routes, save_diagram};
pub use extract::{extract_routes, Route};
pub use filter::{filter_routes, FilterPattern};
pub use hierarchy::{build_hierarchy, render_hierarchy, Hierarchy, RenderOptions};
