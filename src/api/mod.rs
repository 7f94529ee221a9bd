// API module entry
// JSON endpoints for course metadata, health checks, and the tool catalog

pub mod handlers;
mod response;
pub mod types;

pub use response::json_response;
