//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! This module provides concrete implementations of the repository traits
//! defined in the domain layer.
//!
//! ## Available Repositories
//!
//! - **ApplicationRepository** - Job-application listing, lookup, and
//!   sparse review updates

pub mod application_repository;

// Re-export repository structs for convenience
pub use application_repository::PgApplicationRepository;
