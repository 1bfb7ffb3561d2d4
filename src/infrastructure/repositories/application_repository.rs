//! Application Repository Implementation
//!
//! PostgreSQL implementation of job-application operations with offset
//! pagination, filter predicates, and sparse partial updates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::{
    ApplicationChanges, ApplicationFilter, ApplicationRepository, ApplicationStatus,
    InterviewSchedule, JobApplication,
};
use crate::shared::error::AppError;

/// Columns returned for every application query.
const APPLICATION_COLUMNS: &str = "id, name, email, job_id, status, priority, rating, \
     internal_notes, interview_schedule, created_at, updated_at";

/// PostgreSQL application repository implementation.
///
/// Provides the data-access layer for the review workflow:
/// - Filtered, offset-paginated listing ordered by submission time
/// - Filtered counting for pagination metadata
/// - Sparse UPDATE sets so merge semantics hold at the statement level
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    /// Creates a new PgApplicationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for application queries.
/// Maps to the job_applications table schema defined in the migration.
#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    id: i64,
    name: String,
    email: String,
    job_id: Option<i64>,
    status: String,
    priority: Option<String>,
    rating: Option<i32>,
    internal_notes: Option<String>,
    interview_schedule: Option<Json<InterviewSchedule>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ApplicationRow {
    /// Converts database row to domain JobApplication entity.
    fn into_application(self) -> JobApplication {
        JobApplication {
            id: self.id,
            name: self.name,
            email: self.email,
            job_id: self.job_id,
            status: ApplicationStatus::parse(&self.status).unwrap_or_default(),
            priority: self.priority,
            rating: self.rating,
            internal_notes: self.internal_notes,
            interview_schedule: self.interview_schedule.map(|Json(schedule)| schedule),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    /// Find an application by its ID.
    ///
    /// Returns None if the application does not exist.
    async fn find_by_id(&self, id: i64) -> Result<Option<JobApplication>, AppError> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM job_applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_application()))
    }

    /// Fetch one page of applications matching the filter.
    ///
    /// A NULL bind exempts its predicate, so absent filters do not
    /// constrain the result. Ordered by submission time, newest first.
    async fn list(
        &self,
        filter: &ApplicationFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<JobApplication>, AppError> {
        let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM job_applications
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::bigint IS NULL OR job_id = $2)
              AND ($3::text IS NULL OR name ILIKE $3 OR email ILIKE $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#
        ))
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.job_id)
        .bind(search_pattern(filter))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_application()).collect())
    }

    /// Count applications matching the filter, ignoring pagination bounds.
    async fn count(&self, filter: &ApplicationFilter) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM job_applications
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::bigint IS NULL OR job_id = $2)
              AND ($3::text IS NULL OR name ILIKE $3 OR email ILIKE $3)
            "#,
        )
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.job_id)
        .bind(search_pattern(filter))
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Apply a sparse update to exactly one application.
    ///
    /// The SET clause is built from the fields present in `changes`;
    /// `updated_at` is always written. Returns the full updated record,
    /// or None when no row matched the identifier.
    async fn update(
        &self,
        id: i64,
        changes: &ApplicationChanges,
    ) -> Result<Option<JobApplication>, AppError> {
        let mut query = String::from("UPDATE job_applications SET updated_at = $2");
        let mut param_count = 2;

        if changes.status.is_some() {
            param_count += 1;
            query.push_str(&format!(", status = ${}", param_count));
        }
        if changes.priority.is_some() {
            param_count += 1;
            query.push_str(&format!(", priority = ${}", param_count));
        }
        if changes.rating.is_some() {
            param_count += 1;
            query.push_str(&format!(", rating = ${}", param_count));
        }
        if changes.internal_notes.is_some() {
            param_count += 1;
            query.push_str(&format!(", internal_notes = ${}", param_count));
        }
        if changes.interview_schedule.is_some() {
            param_count += 1;
            query.push_str(&format!(", interview_schedule = ${}", param_count));
        }

        query.push_str(&format!(
            " WHERE id = $1 RETURNING {APPLICATION_COLUMNS}"
        ));

        let mut q = sqlx::query_as::<_, ApplicationRow>(&query)
            .bind(id)
            .bind(changes.updated_at);

        if let Some(status) = changes.status {
            q = q.bind(status.as_str());
        }
        if let Some(priority) = &changes.priority {
            q = q.bind(priority);
        }
        if let Some(rating) = changes.rating {
            q = q.bind(rating);
        }
        if let Some(notes) = &changes.internal_notes {
            q = q.bind(notes);
        }
        if let Some(schedule) = &changes.interview_schedule {
            q = q.bind(Json(schedule));
        }

        let row = q.fetch_optional(&self.pool).await?;

        Ok(row.map(|r| r.into_application()))
    }

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// ILIKE pattern for the name/email substring filter.
fn search_pattern(filter: &ApplicationFilter) -> Option<String> {
    filter.search.as_ref().map(|term| format!("%{}%", term))
}
