//! JobApplication entity and repository trait.
//!
//! Maps to the `job_applications` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Review state for a job application.
///
/// The set is closed: unknown strings are rejected at the boundary rather
/// than persisted verbatim. Transitions are forward-only; `accepted` and
/// `rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewing,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Parse from the wire/database string representation.
    ///
    /// Returns None for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "reviewing" => Some(Self::Reviewing),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewing => "reviewing",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Whether a review can move from this state to `next`.
    ///
    /// Re-submitting the current state is allowed (idempotent update);
    /// terminal states accept no other transition.
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;

        if *self == next {
            return true;
        }

        matches!(
            (*self, next),
            (Pending, Reviewing)
                | (Pending, Accepted)
                | (Pending, Rejected)
                | (Reviewing, Accepted)
                | (Reviewing, Rejected)
        )
    }

    /// Whether this state accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scheduled interview slot.
///
/// `scheduled_at` is derived from `date` + `time` at construction and stored
/// alongside them, so consumers never re-combine the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSchedule {
    /// Interview date
    pub date: NaiveDate,

    /// Interview start time
    pub time: NaiveTime,

    /// Combined timestamp (UTC)
    pub scheduled_at: DateTime<Utc>,
}

impl InterviewSchedule {
    /// Build a schedule from its parts, deriving the combined timestamp.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            scheduled_at: date.and_time(time).and_utc(),
        }
    }
}

/// Represents a candidate's job application under review.
///
/// Maps to the `job_applications` table:
/// - id: BIGSERIAL PRIMARY KEY (assigned by the store, immutable)
/// - name: VARCHAR(255) NOT NULL
/// - email: VARCHAR(255) NOT NULL
/// - job_id: BIGINT NULL (job-listing reference)
/// - status: VARCHAR(20) NOT NULL DEFAULT 'pending'
/// - priority: VARCHAR(20) NULL
/// - rating: INTEGER NULL
/// - internal_notes: TEXT NULL
/// - interview_schedule: JSONB NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW() (write-once)
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW() (refreshed on update)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    /// Store-assigned identifier (primary key)
    pub id: i64,

    /// Candidate name (free text, not validated by this layer)
    pub name: String,

    /// Candidate email (free text, not validated by this layer)
    pub email: String,

    /// Optional reference to the job listing applied for
    pub job_id: Option<i64>,

    /// Current review state
    #[serde(default)]
    pub status: ApplicationStatus,

    /// Reviewer-assigned priority token
    pub priority: Option<String>,

    /// Reviewer rating (0-5)
    pub rating: Option<i32>,

    /// Reviewer notes, never shown to the candidate
    pub internal_notes: Option<String>,

    /// Scheduled interview, if any
    pub interview_schedule: Option<InterviewSchedule>,

    /// Submission timestamp
    pub created_at: DateTime<Utc>,

    /// Last review-change timestamp
    pub updated_at: DateTime<Utc>,
}

/// Filter predicate for list/count queries.
///
/// A None field means "no filtering on this field"; the `all` sentinel in
/// the HTTP layer resolves to `status: None` before reaching the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationFilter {
    /// Exact status match
    pub status: Option<ApplicationStatus>,

    /// Exact job-listing reference match
    pub job_id: Option<i64>,

    /// Case-insensitive substring match on candidate name OR email
    pub search: Option<String>,
}

/// Sparse update set for a single application.
///
/// Only Some fields are written; merge semantics, not replace. `updated_at`
/// is always written.
#[derive(Debug, Clone)]
pub struct ApplicationChanges {
    pub status: Option<ApplicationStatus>,
    pub priority: Option<String>,
    pub rating: Option<i32>,
    pub internal_notes: Option<String>,
    pub interview_schedule: Option<InterviewSchedule>,
    pub updated_at: DateTime<Utc>,
}

/// Repository trait for JobApplication data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Find an application by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<JobApplication>, AppError>;

    /// Fetch one page of applications matching the filter, ordered by
    /// `created_at` descending.
    async fn list(
        &self,
        filter: &ApplicationFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<JobApplication>, AppError>;

    /// Count applications matching the filter, ignoring pagination bounds.
    async fn count(&self, filter: &ApplicationFilter) -> Result<i64, AppError>;

    /// Apply a sparse update to exactly the application matching `id` and
    /// return the resulting full record. None when no row matched.
    async fn update(
        &self,
        id: i64,
        changes: &ApplicationChanges,
    ) -> Result<Option<JobApplication>, AppError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
