//! ANSI color table for terminal output.
//!
//! Each HTTP method has a fixed display color so diagrams stay scannable; tokens
//! are reset individually, never leaking color into surrounding text.

pub const RESET: &str = "\x1b[0m";
pub const BRIGHT: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

/// Fixed display color for an HTTP method token.
#[must_use]
pub fn method_color(method: &str) -> &'static str {
    match method.to_ascii_uppercase().as_str() {
        "GET" => GREEN,
        "POST" => BLUE,
        "PUT" => YELLOW,
        "DELETE" => RED,
        "PATCH" => CYAN,
        _ => WHITE,
    }
}

/// Join method tokens with `, `, each wrapped in its method color.
#[must_use]
pub fn colorize_methods(methods: &[String]) -> String {
    methods
        .iter()
        .map(|method| format!("{}{}{}", method_color(method), method, RESET))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_color_table() {
        assert_eq!(method_color("GET"), GREEN);
        assert_eq!(method_color("post"), BLUE);
        assert_eq!(method_color("DELETE"), RED);
        assert_eq!(method_color("OPTIONS"), WHITE);
    }

    #[test]
    fn test_colorize_methods_resets_each_token() {
        let out = colorize_methods(&["GET".to_string(), "POST".to_string()]);
        assert_eq!(out, "\x1b[32mGET\x1b[0m, \x1b[34mPOST\x1b[0m");
    }
}
