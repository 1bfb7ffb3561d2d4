//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use chrono::{Duration, Utc};
use tower::ServiceExt;

use careers_server::config::{CorsSettings, DatabaseSettings, ServerSettings, Settings};
use careers_server::domain::{
    ApplicationChanges, ApplicationFilter, ApplicationRepository, ApplicationStatus,
    JobApplication,
};
use careers_server::infrastructure::email::MailSender;
use careers_server::presentation::http::routes;
use careers_server::shared::error::AppError;
use careers_server::startup::AppState;

/// In-memory repository with the same filter/pagination/merge semantics as
/// the PostgreSQL implementation.
#[derive(Default)]
pub struct InMemoryApplicationRepository {
    rows: Mutex<Vec<JobApplication>>,
}

impl InMemoryApplicationRepository {
    pub fn seed(&self, application: JobApplication) {
        self.rows.lock().unwrap().push(application);
    }

    fn matches(filter: &ApplicationFilter, application: &JobApplication) -> bool {
        if let Some(status) = filter.status {
            if application.status != status {
                return false;
            }
        }
        if let Some(job_id) = filter.job_id {
            if application.job_id != Some(job_id) {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let term = search.to_lowercase();
            if !application.name.to_lowercase().contains(&term)
                && !application.email.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<JobApplication>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list(
        &self,
        filter: &ApplicationFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<JobApplication>, AppError> {
        let mut matching: Vec<JobApplication> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| Self::matches(filter, a))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &ApplicationFilter) -> Result<i64, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| Self::matches(filter, a))
            .count() as i64)
    }

    async fn update(
        &self,
        id: i64,
        changes: &ApplicationChanges,
    ) -> Result<Option<JobApplication>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(application) = rows.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        if let Some(status) = changes.status {
            application.status = status;
        }
        if let Some(priority) = &changes.priority {
            application.priority = Some(priority.clone());
        }
        if let Some(rating) = changes.rating {
            application.rating = Some(rating);
        }
        if let Some(notes) = &changes.internal_notes {
            application.internal_notes = Some(notes.clone());
        }
        if let Some(schedule) = &changes.interview_schedule {
            application.interview_schedule = Some(schedule.clone());
        }
        application.updated_at = changes.updated_at;

        Ok(Some(application.clone()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Mailer fake that records every send
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SentMail>>,
}

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl MailSender for RecordingMailer {
    fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryApplicationRepository>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    /// Create a new test application with in-memory dependencies
    pub fn new() -> Self {
        let repo = Arc::new(InMemoryApplicationRepository::default());
        let mailer = Arc::new(RecordingMailer::default());

        let state = AppState {
            repo: repo.clone(),
            mailer: mailer.clone(),
            settings: Arc::new(test_settings()),
        };

        Self {
            router: routes::create_router(state),
            repo,
            mailer,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Read a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Application fixture; `age_minutes` spaces out submission times so
/// ordering assertions are deterministic
pub fn application_fixture(
    id: i64,
    name: &str,
    email: &str,
    status: ApplicationStatus,
    age_minutes: i64,
) -> JobApplication {
    let stamp = Utc::now() - Duration::minutes(age_minutes);
    JobApplication {
        id,
        name: name.to_string(),
        email: email.to_string(),
        job_id: None,
        status,
        priority: None,
        rating: None,
        internal_notes: None,
        interview_schedule: None,
        created_at: stamp,
        updated_at: stamp,
    }
}

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        mail: None,
        environment: "test".to_string(),
    }
}
