//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod error_translator;
pub mod id_generator;
