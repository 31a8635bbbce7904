//! # CLI Module
//!
//! Command-line interface for routescope.
//!
//! ## Commands
//!
//! ### `print`
//!
//! Extract the routes of an application snapshot and print or save the diagram:
//!
//! ```bash
//! routescope print --app snapshot.json
//! routescope print --app snapshot.json --output routes.txt --color-file
//! routescope print --app snapshot.json --flat --exclude health --exclude '/^\/internal/'
//! ```
//!
//! ### `serve`
//!
//! Start the interactive web visualization:
//!
//! ```bash
//! routescope serve --app snapshot.json --addr 0.0.0.0:3000 --route routes
//! ```
//!
//! The diagram page is served at the configured route and the raw route list at
//! `<route>-data`.

mod commands;

pub use commands::{run_cli, Cli, Commands};
