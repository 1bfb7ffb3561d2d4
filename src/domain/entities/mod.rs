//! # Domain Entities
//!
//! Core domain entities for the application-review workflow.
//!
//! ## Core Entities
//!
//! - **JobApplication**: A candidate's submission under review, with its
//!   mutable review fields (status, priority, rating, notes, interview
//!   schedule)
//!
//! ## Supporting Types
//!
//! - **ApplicationStatus**: Closed review-state set with transition rules
//! - **InterviewSchedule**: Date/time pair with the derived combined timestamp
//! - **ApplicationFilter** / **ApplicationChanges**: Query and sparse-update
//!   contracts consumed by the repository
//!
//! ## Repository Traits
//!
//! `ApplicationRepository` defines the data-access contract and is
//! implemented in the infrastructure layer, following the dependency
//! inversion principle.

mod application;

pub use application::{
    ApplicationChanges, ApplicationFilter, ApplicationRepository, ApplicationStatus,
    InterviewSchedule, JobApplication,
};
