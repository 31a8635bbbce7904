use super::request::{parse_request, ParsedRequest};
use super::response::{write_html, write_json};
use crate::app::AppHandle;
use crate::config::DiagramConfig;
use crate::diagram::print_routes;
use crate::extract::{extract_routes, Route};
use crate::filter::filter_routes;
use askama::Template;
use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use std::io;
use std::sync::Arc;
use tracing::{info, warn};

/// The interactive diagram page, with the current route list embedded as JSON.
#[derive(Template)]
#[template(path = "diagram.html")]
struct DiagramPage {
    routes_json: String,
}

/// HTTP service exposing the route visualization.
///
/// Serves exactly two paths derived from the configured web route: the HTML
/// diagram page at `<web_route>` and the raw filtered route list as JSON at
/// `<web_route>-data`. Routes are re-extracted per request, so the diagram
/// always reflects the application handle it was built around.
pub struct DiagramService {
    app: Arc<AppHandle>,
    config: Arc<DiagramConfig>,
    web_path: String,
    data_path: String,
    /// One-shot startup banner state. Held here, on the long-lived service,
    /// so independent services announce independently.
    banner_printed: bool,
}

impl Clone for DiagramService {
    fn clone(&self) -> Self {
        Self {
            app: Arc::clone(&self.app),
            config: Arc::clone(&self.config),
            web_path: self.web_path.clone(),
            data_path: self.data_path.clone(),
            banner_printed: self.banner_printed,
        }
    }
}

impl DiagramService {
    #[must_use]
    pub fn new(app: AppHandle, config: DiagramConfig) -> Self {
        let (web_path, data_path) = config.visualization_paths();
        Self {
            app: Arc::new(app),
            config: Arc::new(config),
            web_path,
            data_path,
            banner_printed: false,
        }
    }

    /// The paths the visualization is reachable at: `(web, data)`.
    #[must_use]
    pub fn visualization_paths(&self) -> (&str, &str) {
        (&self.web_path, &self.data_path)
    }

    /// Print the visualization banner and, when console logging is enabled, the
    /// route diagram. Runs once; subsequent calls are no-ops.
    pub fn announce(&mut self) {
        if self.banner_printed {
            return;
        }
        self.banner_printed = true;

        println!("\n=====================================================");
        println!("ROUTE DIAGRAM AVAILABLE AT: {}", self.web_path);
        println!("ROUTE DATA AVAILABLE AT: {}", self.data_path);
        println!("=====================================================\n");

        let routes = self.current_routes();
        info!(route_count = routes.len(), "route diagram service ready");
        if self.config.log_to_console {
            print_routes(&routes, &self.config);
        }
    }

    /// Extract and filter the application's routes.
    fn current_routes(&self) -> Vec<Route> {
        let routes = extract_routes(&self.app);
        filter_routes(&routes, &self.config.exclude_patterns)
    }
}

impl HttpService for DiagramService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let ParsedRequest { method, path } = parse_request(&req);

        if method == "GET" && path == self.data_path {
            let routes = self.current_routes();
            let body = serde_json::to_value(&routes).unwrap_or_else(|_| json!([]));
            write_json(res, 200, &body);
            return Ok(());
        }

        if method == "GET" && path == self.web_path {
            let routes = self.current_routes();
            let routes_json =
                serde_json::to_string(&routes).unwrap_or_else(|_| "[]".to_string());
            let page = DiagramPage { routes_json };
            match page.render() {
                Ok(html) => write_html(res, 200, html),
                Err(err) => {
                    warn!(error = %err, "failed to render diagram page");
                    write_json(
                        res,
                        500,
                        &json!({ "error": "failed to render diagram page" }),
                    );
                }
            }
            return Ok(());
        }

        write_json(
            res,
            404,
            &json!({ "error": "Not Found", "method": method, "path": path }),
        );
        Ok(())
    }
}
