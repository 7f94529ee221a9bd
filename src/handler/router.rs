//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, exact path
//! matching, and access logging. Generic over the request body type because
//! no route ever reads one: query strings and bodies are accepted and
//! ignored, never parsed or reflected.

use crate::api;
use crate::config::AppState;
use crate::handler::pages;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let is_head = method == Method::HEAD;

    let mut response = route_request(&method, &path, &state);

    let body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
        .unwrap_or(usize::MAX);

    // HEAD keeps the headers of the matching GET but sends no body
    if is_head {
        *response.body_mut() = Full::new(Bytes::new());
    }

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            path,
        );
        entry.query = query;
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a request by method and path
fn route_request(method: &Method, path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let http = &state.config.http;

    // Non-GET methods are rejected before any dispatch, so request bodies
    // never reach a handler
    if *method != Method::GET && *method != Method::HEAD {
        logger::log_warning(&format!("Method not allowed: {method} {path}"));
        return http::build_405_response(http);
    }

    match path {
        "/" => http::build_html_response(pages::render_index(), http),
        "/api/info" => api::handlers::course_info(http),
        "/api/health" => api::handlers::health(http),
        "/api/devops-tools" => api::handlers::devops_tools(http),
        _ => http::build_404_response(http),
    }
}
