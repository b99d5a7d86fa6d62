//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Payload**: JSON object input with presence/type-aware field access
//! - **EntityError**: `<ENTITY>.<VIOLATION>` validation failure codes

mod entity_error;
mod payload;

pub use entity_error::*;
pub use payload::*;
