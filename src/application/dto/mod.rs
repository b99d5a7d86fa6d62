//! Data Transfer Objects
//!
//! DTOs for API response serialization. Request bodies are read as
//! [`Payload`](crate::domain::Payload) so entities can validate them.

pub mod response;

pub use response::*;
