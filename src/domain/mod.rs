//! # Domain Layer
//!
//! The domain layer contains the core business rules of the forum.
//! It is independent of any web framework or storage concerns.
//!
//! ## Structure
//!
//! - **entities**: Forum entities (User, Thread, Comment, Reply, Like) and
//!   their repository traits
//! - **value_objects**: Payloads and entity validation errors
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Entities validate their own payloads at construction
//! - Repository traits define data access contracts

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
