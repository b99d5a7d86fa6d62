//! Application Layer
//!
//! Contains the use cases, the security ports they depend on and the
//! response DTOs. This layer orchestrates the flow of data between the
//! presentation and domain layers.

pub mod dto;
pub mod security;
pub mod use_cases;

pub use use_cases::{Repositories, UseCases};
