#![allow(dead_code)]

use routescope::app::RouterHandle;
use routescope::{App, HandlerRef, Layer, NestedHandle, PathMatcher, Route, RouteEntry};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

/// A terminal route layer with method-flag map and named handlers.
pub fn route_layer(path: &str, methods: &[&str], handlers: &[&str]) -> Layer {
    Layer {
        route: Some(RouteEntry {
            path: Some(path.to_string()),
            methods: methods.iter().map(|m| ((*m).to_string(), true)).collect(),
            method: None,
            stack: handlers.iter().map(|h| HandlerRef::named(*h)).collect(),
        }),
        ..Layer::default()
    }
}

/// A nested sub-router layer guarded by a serialized matcher.
pub fn router_layer(matcher: &str, stack: Vec<Layer>) -> Layer {
    Layer {
        name: Some("router".to_string()),
        regexp: Some(PathMatcher::new(matcher)),
        handle: Some(NestedHandle {
            name: None,
            stack: Some(stack),
        }),
        ..Layer::default()
    }
}

/// A mounted sub-application layer guarded by a serialized matcher.
pub fn mounted_app_layer(matcher: &str, stack: Vec<Layer>) -> Layer {
    Layer {
        name: Some("bound dispatch".to_string()),
        regexp: Some(PathMatcher::new(matcher)),
        handle: Some(NestedHandle {
            name: None,
            stack: Some(stack),
        }),
        ..Layer::default()
    }
}

/// An application exposing `stack` through the primary attachment point.
pub fn app_with(stack: Vec<Layer>) -> App {
    App {
        router: Some(RouterHandle { stack }),
        ..App::default()
    }
}

/// The serialized matcher the framework emits for a mount at `prefix`.
pub fn mount_matcher(prefix: &str) -> String {
    format!("/^{}\\/?(?=\\/|$)/i", prefix.replace('/', "\\/"))
}

pub fn route(path: &str, methods: &[&str]) -> Route {
    Route {
        path: path.to_string(),
        methods: methods.iter().map(|m| (*m).to_string()).collect(),
        middleware: Vec::new(),
    }
}

/// Strip ANSI escape sequences from rendered output.
pub fn strip_ansi(text: &str) -> String {
    let escapes = regex::Regex::new("\x1b\\[[0-9;]*m").unwrap();
    escapes.replace_all(text, "").into_owned()
}

/// Send a raw HTTP request and collect the full response as a string.
pub fn send_request(addr: &SocketAddr, req: &str) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(req.as_bytes()).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    let mut buf = Vec::new();
    loop {
        let mut tmp = [0u8; 1024];
        match stream.read(&mut tmp) {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&tmp[..n]),
            Err(ref e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                break
            }
            Err(e) => panic!("read error: {e:?}"),
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Split a raw HTTP response into (status, body).
pub fn parse_response(resp: &str) -> (u16, String) {
    let mut parts = resp.splitn(2, "\r\n\r\n");
    let head = parts.next().unwrap_or("");
    let body = parts.next().unwrap_or("").to_string();
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|code| code.parse().ok())
        .unwrap_or(0);
    (status, body)
}
