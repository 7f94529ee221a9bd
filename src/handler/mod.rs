//! Request handler module
//!
//! Routing dispatch and the landing page.

pub mod pages;
pub mod router;

pub use router::handle_request;
