//! Application Service
//!
//! Handles job-application review operations: listing with filters and
//! pagination, single-record lookup, and partial-merge updates.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::{
    ApplicationChanges, ApplicationFilter, ApplicationRepository, ApplicationStatus,
    InterviewSchedule, JobApplication,
};
use crate::infrastructure::email::MailSender;

/// Filter value meaning "no filtering on status"
pub const ALL_STATUSES_SENTINEL: &str = "all";

/// Page size when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on caller-supplied page sizes
pub const MAX_PAGE_SIZE: i64 = 100;

/// Application service trait
#[async_trait]
pub trait ApplicationService: Send + Sync {
    /// List applications matching the query, with pagination metadata
    async fn list_applications(
        &self,
        query: ApplicationQueryDto,
    ) -> Result<ApplicationPageDto, ApplicationError>;

    /// Get a single application by identifier
    async fn get_application(&self, id: i64) -> Result<ApplicationDto, ApplicationError>;

    /// Apply a partial review update to an application
    async fn update_application(
        &self,
        id: i64,
        update: UpdateApplicationDto,
    ) -> Result<ApplicationDto, ApplicationError>;
}

/// List query parameters
#[derive(Debug, Clone, Default)]
pub struct ApplicationQueryDto {
    /// Status filter; `all` disables status filtering
    pub status: Option<String>,
    pub job_id: Option<i64>,
    /// Case-insensitive substring match on candidate name or email
    pub search: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Partial update request
///
/// Field presence is the merge contract: None leaves the stored value
/// untouched, Some applies the value even when it is falsy (zero rating,
/// empty notes).
#[derive(Debug, Clone, Default)]
pub struct UpdateApplicationDto {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub rating: Option<i32>,
    pub internal_notes: Option<String>,
    pub interview_schedule: Option<InterviewSlotDto>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Interview slot as supplied by the caller; the combined timestamp is
/// derived server-side
#[derive(Debug, Clone)]
pub struct InterviewSlotDto {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Application data transfer object
#[derive(Debug, Clone)]
pub struct ApplicationDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub job_id: Option<String>,
    pub status: String,
    pub priority: Option<String>,
    pub rating: Option<i32>,
    pub internal_notes: Option<String>,
    pub interview_schedule: Option<InterviewScheduleDto>,
    pub created_at: String,
    pub updated_at: String,
}

/// Interview schedule transfer object
#[derive(Debug, Clone)]
pub struct InterviewScheduleDto {
    pub date: String,
    pub time: String,
    pub scheduled_at: String,
}

impl From<InterviewSchedule> for InterviewScheduleDto {
    fn from(schedule: InterviewSchedule) -> Self {
        Self {
            date: schedule.date.to_string(),
            time: schedule.time.format("%H:%M").to_string(),
            scheduled_at: schedule.scheduled_at.to_rfc3339(),
        }
    }
}

impl From<JobApplication> for ApplicationDto {
    fn from(application: JobApplication) -> Self {
        Self {
            id: application.id.to_string(),
            name: application.name,
            email: application.email,
            job_id: application.job_id.map(|id| id.to_string()),
            status: application.status.as_str().to_string(),
            priority: application.priority,
            rating: application.rating,
            internal_notes: application.internal_notes,
            interview_schedule: application.interview_schedule.map(InterviewScheduleDto::from),
            created_at: application.created_at.to_rfc3339(),
            updated_at: application.updated_at.to_rfc3339(),
        }
    }
}

/// One page of applications plus pagination metadata
#[derive(Debug, Clone)]
pub struct ApplicationPageDto {
    pub applications: Vec<ApplicationDto>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Application service errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Application not found")]
    NotFound,

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ApplicationService implementation
pub struct ApplicationServiceImpl<R, M>
where
    R: ApplicationRepository + ?Sized,
    M: MailSender + ?Sized,
{
    repo: Arc<R>,
    mailer: Arc<M>,
}

impl<R, M> ApplicationServiceImpl<R, M>
where
    R: ApplicationRepository + ?Sized,
    M: MailSender + ?Sized,
{
    pub fn new(repo: Arc<R>, mailer: Arc<M>) -> Self {
        Self { repo, mailer }
    }

    /// Resolve the query into a repository filter.
    ///
    /// The `all` sentinel and an absent status both mean "no status filter";
    /// any other value must parse into the closed status set.
    fn build_filter(query: &ApplicationQueryDto) -> Result<ApplicationFilter, ApplicationError> {
        let status = match query.status.as_deref() {
            None | Some(ALL_STATUSES_SENTINEL) => None,
            Some(raw) => Some(
                ApplicationStatus::parse(raw)
                    .ok_or_else(|| ApplicationError::UnknownStatus(raw.to_string()))?,
            ),
        };

        Ok(ApplicationFilter {
            status,
            job_id: query.job_id,
            search: query.search.clone(),
        })
    }

    /// Queue a status-change notification to the candidate.
    ///
    /// Delivery failures are logged and never surfaced; the update has
    /// already been persisted.
    fn notify_status_change(&self, application: &JobApplication, status: ApplicationStatus) {
        let subject = "Update on your application".to_string();
        let html = format!(
            "<p>Hi {},</p><p>The status of your application is now <b>{}</b>.</p>",
            application.name, status
        );

        if let Err(e) = self.mailer.send(&application.email, &subject, &html) {
            tracing::warn!(
                application_id = application.id,
                "Failed to queue status notification: {}",
                e
            );
        }
    }
}

#[async_trait]
impl<R, M> ApplicationService for ApplicationServiceImpl<R, M>
where
    R: ApplicationRepository + ?Sized + 'static,
    M: MailSender + ?Sized + 'static,
{
    async fn list_applications(
        &self,
        query: ApplicationQueryDto,
    ) -> Result<ApplicationPageDto, ApplicationError> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = (page - 1) * limit;

        let filter = Self::build_filter(&query)?;

        // Count and fetch are two independent statements; totals may be
        // momentarily stale relative to the page under concurrent writes.
        let total = self
            .repo
            .count(&filter)
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        let applications = self
            .repo
            .list(&filter, offset, limit)
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

        Ok(ApplicationPageDto {
            applications: applications.into_iter().map(ApplicationDto::from).collect(),
            page,
            limit,
            total,
            total_pages,
        })
    }

    async fn get_application(&self, id: i64) -> Result<ApplicationDto, ApplicationError> {
        let application = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))?
            .ok_or(ApplicationError::NotFound)?;

        Ok(ApplicationDto::from(application))
    }

    async fn update_application(
        &self,
        id: i64,
        update: UpdateApplicationDto,
    ) -> Result<ApplicationDto, ApplicationError> {
        // Fetch first: gives a consistent not-found and the current status
        // for transition validation.
        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))?
            .ok_or(ApplicationError::NotFound)?;

        let status = match update.status.as_deref() {
            None => None,
            Some(raw) => {
                let next = ApplicationStatus::parse(raw)
                    .ok_or_else(|| ApplicationError::UnknownStatus(raw.to_string()))?;

                if !current.status.can_transition_to(next) {
                    return Err(ApplicationError::InvalidTransition {
                        from: current.status,
                        to: next,
                    });
                }

                Some(next)
            }
        };

        let changes = ApplicationChanges {
            status,
            priority: update.priority,
            rating: update.rating,
            internal_notes: update.internal_notes,
            interview_schedule: update
                .interview_schedule
                .map(|slot| InterviewSchedule::new(slot.date, slot.time)),
            updated_at: update.updated_at.unwrap_or_else(Utc::now),
        };

        let updated = self
            .repo
            .update(id, &changes)
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))?
            .ok_or(ApplicationError::NotFound)?;

        if let Some(next) = status {
            if next != current.status {
                self.notify_status_change(&updated, next);
            }
        }

        Ok(ApplicationDto::from(updated))
    }
}
