//! Integration tests for text diagram generation and file output.

use routescope::{generate_text_diagram, print_routes, DiagramConfig};

mod common;
use common::{route, strip_ansi};

#[test]
fn test_hierarchical_scenario_diagram() {
    let routes = vec![
        route("/", &["GET"]),
        route("/api/users", &["GET", "POST"]),
        route("/api/users/:id", &["GET", "PUT", "DELETE"]),
    ];
    let diagram = generate_text_diagram(&routes, &DiagramConfig::default());

    for expected in ["api", "users", "GET", "POST", "Total routes: 3"] {
        assert!(
            diagram.contains(expected),
            "missing {expected:?} in:\n{diagram}"
        );
    }
}

#[test]
fn test_empty_routes_diagram() {
    let diagram = generate_text_diagram(&[], &DiagramConfig::default());
    assert!(diagram.contains("No routes found"));
    assert!(!diagram.contains("Total routes"));
}

#[test]
fn test_color_file_toggle_is_escape_only() {
    let routes = vec![
        route("/api/users", &["GET", "POST"]),
        route("/api/users/:id", &["DELETE"]),
    ];
    let plain = generate_text_diagram(&routes, &DiagramConfig::default());
    let colored = generate_text_diagram(
        &routes,
        &DiagramConfig {
            color_output: true,
            ..DiagramConfig::default()
        },
    );
    assert_eq!(strip_ansi(&colored), plain);
}

#[test]
fn test_flat_diagram_lists_every_route() {
    let config = DiagramConfig {
        hierarchical: false,
        ..DiagramConfig::default()
    };
    let routes = vec![
        route("/b", &["GET"]),
        route("/a", &["POST", "GET"]),
        route("/c", &[]),
    ];
    let diagram = generate_text_diagram(&routes, &config);

    assert!(diagram.contains("[POST, GET] /a"));
    assert!(diagram.contains("[GET] /b"));
    assert!(diagram.contains("[UNKNOWN] /c"));
    let a = diagram.find("/a").unwrap();
    let b = diagram.find("/b").unwrap();
    assert!(a < b);
}

#[test]
fn test_diagram_saved_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("routes.txt");
    let config = DiagramConfig {
        log_to_console: false,
        output_file: Some(output.clone()),
        ..DiagramConfig::default()
    };
    let routes = vec![route("/api/users", &["GET"])];
    print_routes(&routes, &config);

    let saved = std::fs::read_to_string(&output).unwrap();
    assert!(saved.contains("APPLICATION ROUTES"));
    assert!(saved.contains("Total routes: 1"));
    // Colors stay out of the file unless explicitly requested.
    assert!(!saved.contains('\x1b'));
}

#[test]
fn test_identical_output_for_identical_input() {
    let routes = vec![
        route("/api/users", &["GET", "POST"]),
        route("/", &["GET"]),
    ];
    let config = DiagramConfig::default();
    assert_eq!(
        generate_text_diagram(&routes, &config),
        generate_text_diagram(&routes, &config)
    );
}
