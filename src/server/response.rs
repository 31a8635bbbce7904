use may_minihttp::Response;
use serde_json::Value;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Write a JSON body with the given status.
pub fn write_json(res: &mut Response, status: u16, body: &Value) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: application/json");
    res.body_vec(body.to_string().into_bytes());
}

/// Write an HTML page with the given status.
pub fn write_html(res: &mut Response, status: u16, body: String) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: text/html");
    res.body_vec(body.into_bytes());
}
