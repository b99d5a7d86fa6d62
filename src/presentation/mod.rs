//! Presentation Layer
//!
//! HTTP routes, handlers, extractors and tower middleware.

pub mod http;
pub mod middleware;
