//! Diagram configuration shared by the printing entry points, the HTTP service,
//! and the CLI.

use crate::filter::FilterPattern;
use std::path::PathBuf;

/// Default web path for the visualization routes.
pub const DEFAULT_WEB_ROUTE: &str = "/routes";

/// Options controlling how routes are filtered, rendered, and exposed.
#[derive(Debug, Clone)]
pub struct DiagramConfig {
    /// Print the diagram to stdout.
    pub log_to_console: bool,
    /// File the text diagram is saved to, if any.
    pub output_file: Option<PathBuf>,
    /// Routes whose path matches any of these patterns are dropped.
    pub exclude_patterns: Vec<FilterPattern>,
    /// Hierarchical tree (default) or flat listing.
    pub hierarchical: bool,
    /// Keep ANSI color codes in generated diagram text.
    pub color_output: bool,
    /// Web path the visualization is served from.
    pub web_route: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            log_to_console: true,
            output_file: None,
            exclude_patterns: Vec::new(),
            hierarchical: true,
            color_output: false,
            web_route: DEFAULT_WEB_ROUTE.to_string(),
        }
    }
}

impl DiagramConfig {
    /// The web and data paths the visualization routes live at, normalizing a
    /// missing leading slash on the configured route.
    #[must_use]
    pub fn visualization_paths(&self) -> (String, String) {
        let web = if self.web_route.starts_with('/') {
            self.web_route.clone()
        } else {
            format!("/{}", self.web_route)
        };
        let data = format!("{web}-data");
        (web, data)
    }
}
