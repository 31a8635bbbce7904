use may_minihttp::Request;
use tracing::debug;

/// The request fields the diagram endpoints care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, ...)
    pub method: String,
    /// Request path with any query string stripped
    pub path: String,
}

/// Extract method and path from a raw `may_minihttp` request.
pub fn parse_request(req: &Request) -> ParsedRequest {
    let method = req.method().to_string();
    let raw_path = req.path().to_string();
    let path = raw_path.split('?').next().unwrap_or("/").to_string();

    debug!(method = %method, path = %path, "request parsed");

    ParsedRequest { method, path }
}
