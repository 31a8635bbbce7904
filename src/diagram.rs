//! Text diagram generation and diagram file output.

use crate::color;
use crate::config::DiagramConfig;
use crate::extract::Route;
use crate::hierarchy::{build_hierarchy, render_hierarchy, RenderOptions};
use std::path::Path;
use tracing::{error, info};

const HEADER: &str = "APPLICATION ROUTES\n==================\n\n";

/// Generate the full text diagram: header, hierarchical tree (or flat listing),
/// and a summary line.
///
/// Stripped of ANSI escape sequences, colored and plain output are
/// byte-identical.
#[must_use]
pub fn generate_text_diagram(routes: &[Route], config: &DiagramConfig) -> String {
    let mut diagram = String::from(HEADER);

    if routes.is_empty() {
        diagram.push_str("No routes found\n");
        return diagram;
    }

    if config.hierarchical {
        let hierarchy = build_hierarchy(routes);
        diagram.push_str(&render_hierarchy(
            &hierarchy,
            RenderOptions {
                use_colors: config.color_output,
            },
        ));
    } else {
        let mut sorted = routes.to_vec();
        sorted.sort_by(|a, b| {
            a.path
                .cmp(&b.path)
                .then_with(|| first_method(a).cmp(first_method(b)))
        });
        for route in &sorted {
            diagram.push_str(&format!("[{}] {}\n", format_methods(route, config), route.path));
        }
    }

    diagram.push_str(&format!("\nTotal routes: {}\n", routes.len()));
    diagram
}

fn first_method(route: &Route) -> &str {
    route.methods.first().map(String::as_str).unwrap_or("")
}

fn format_methods(route: &Route, config: &DiagramConfig) -> String {
    if route.methods.is_empty() {
        return "UNKNOWN".to_string();
    }
    if config.color_output {
        color::colorize_methods(&route.methods)
    } else {
        route.methods.join(", ")
    }
}

/// Print the route diagram to stdout (colored) and save it to the configured
/// output file (colored only when `color_output` is set).
pub fn print_routes(routes: &[Route], config: &DiagramConfig) {
    if config.log_to_console {
        let console = DiagramConfig {
            color_output: true,
            ..config.clone()
        };
        println!("{}", generate_text_diagram(routes, &console));
    }

    if let Some(path) = &config.output_file {
        let diagram = generate_text_diagram(routes, config);
        save_diagram(&diagram, path);
    }
}

/// Write a generated diagram to disk. Failures are reported, not propagated;
/// diagram output is best-effort by design of the callers.
pub fn save_diagram(diagram: &str, path: &Path) {
    match std::fs::write(path, diagram) {
        Ok(()) => info!(path = %path.display(), "diagram saved"),
        Err(err) => error!(path = %path.display(), error = %err, "failed to save diagram"),
    }
}
