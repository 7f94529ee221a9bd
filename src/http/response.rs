//! HTTP response building module
//!
//! Builders for the status responses this server emits. Error bodies are
//! fixed plain-text strings so no request content or internal detail can
//! ever leak into a response.

use crate::config::HttpConfig;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Base response builder carrying the Server header and, when enabled,
/// the security headers every response must share.
pub fn response_builder(status: StatusCode, http: &HttpConfig) -> hyper::http::response::Builder {
    let mut builder = Response::builder()
        .status(status)
        .header("Server", &http.server_name);

    if http.security_headers {
        builder = builder
            .header("X-Content-Type-Options", "nosniff")
            .header("X-Frame-Options", "DENY");
    }

    builder
}

/// Build 404 Not Found response
pub fn build_404_response(http: &HttpConfig) -> Response<Full<Bytes>> {
    response_builder(StatusCode::NOT_FOUND, http)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(http: &HttpConfig) -> Response<Full<Bytes>> {
    response_builder(StatusCode::METHOD_NOT_ALLOWED, http)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 200 HTML response
pub fn build_html_response(content: String, http: &HttpConfig) -> Response<Full<Bytes>> {
    let content_length = content.len();

    response_builder(StatusCode::OK, http)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_config(security_headers: bool) -> HttpConfig {
        HttpConfig {
            server_name: "DevOps-Demo/1.0".to_string(),
            security_headers,
        }
    }

    #[test]
    fn test_404_has_plain_body_and_security_headers() {
        let resp = build_404_response(&http_config(true));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()["X-Content-Type-Options"], "nosniff");
        assert_eq!(resp.headers()["X-Frame-Options"], "DENY");
    }

    #[test]
    fn test_405_advertises_allowed_methods() {
        let resp = build_405_response(&http_config(true));
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD");
    }

    #[test]
    fn test_security_headers_can_be_disabled() {
        let resp = build_404_response(&http_config(false));
        assert!(!resp.headers().contains_key("X-Frame-Options"));
        assert_eq!(resp.headers()["Server"], "DevOps-Demo/1.0");
    }

    #[test]
    fn test_html_response_sets_content_length() {
        let resp = build_html_response("<html></html>".to_string(), &http_config(true));
        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "13");
    }
}
