//! # Forum API Library
//!
//! This crate provides a discussion-forum backend with:
//! - RESTful HTTP API endpoints for users, threads, comments, replies and likes
//! - JWT access and refresh tokens
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, payload validation and repository traits
//! - **Application Layer**: Use cases, security ports and response DTOs
//! - **Infrastructure Layer**: Database, repositories and security adapters
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! forum_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, and repository traits
//! +-- application/    Use cases, security ports and DTOs
//! +-- infrastructure/ Database, repositories and security adapters
//! +-- presentation/   HTTP routes and handlers
//! +-- shared/         Common utilities (errors, id generation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
