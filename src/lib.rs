//! Web application for the DevOps automation course.
//!
//! Serves a landing page and three JSON endpoints (course info, health
//! check, tool catalog) over HTTP/1. All responses are built from
//! in-memory constants; nothing is persisted between requests.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
