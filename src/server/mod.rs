//! # Server Module
//!
//! HTTP service exposing the route visualization: an HTML diagram page at the
//! configured web route and the raw route list as JSON at `<web_route>-data`.
//! Built on `may_minihttp` coroutines; see [`DiagramService`] for the endpoints
//! and [`HttpServer`] for lifecycle management.

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_request, ParsedRequest};
pub use service::DiagramService;
