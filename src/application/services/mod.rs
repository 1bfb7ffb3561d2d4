//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ApplicationService**: Job-application listing, lookup, and review
//!   updates

pub mod application_service;

// Re-export application service types
pub use application_service::{
    ApplicationDto, ApplicationError, ApplicationPageDto, ApplicationQueryDto,
    ApplicationService, ApplicationServiceImpl, InterviewScheduleDto, InterviewSlotDto,
    UpdateApplicationDto, ALL_STATUSES_SENTINEL, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
