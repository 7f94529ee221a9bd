//! HTTP protocol layer module
//!
//! Response builders shared by the page and API handlers, decoupled from
//! business logic.

pub mod response;

pub use response::{build_404_response, build_405_response, build_html_response, response_builder};
