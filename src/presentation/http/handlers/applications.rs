//! Application Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::application::dto::request::{ApplicationQueryParams, UpdateApplicationRequest};
use crate::application::dto::response::{
    ApplicationEnvelope, ApplicationListResponse, ApplicationResponse, ApplicationUpdatedResponse,
};
use crate::application::services::{
    ApplicationError, ApplicationQueryDto, ApplicationService, ApplicationServiceImpl,
    InterviewSlotDto, UpdateApplicationDto,
};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// List applications with filters and pagination
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationQueryParams>,
) -> Result<Json<ApplicationListResponse>, AppError> {
    let job_id = match query.job_id.as_deref() {
        None => None,
        Some(raw) => Some(
            raw.parse()
                .map_err(|_| AppError::BadRequest("Invalid jobId".into()))?,
        ),
    };

    let service = ApplicationServiceImpl::new(state.repo.clone(), state.mailer.clone());

    let query_dto = ApplicationQueryDto {
        status: query.status,
        job_id,
        search: query.search,
        page: query.page,
        limit: query.limit,
    };

    let page = service
        .list_applications(query_dto)
        .await
        .map_err(map_application_error)?;

    Ok(Json(ApplicationListResponse::from(page)))
}

/// Get a single application by ID
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApplicationEnvelope>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Missing or invalid application id".into()))?;

    let service = ApplicationServiceImpl::new(state.repo.clone(), state.mailer.clone());

    let application = service
        .get_application(id)
        .await
        .map_err(map_application_error)?;

    Ok(Json(ApplicationEnvelope {
        success: true,
        application: ApplicationResponse::from(application),
    }))
}

/// Apply a partial review update to an application
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateApplicationRequest>,
) -> Result<Json<ApplicationUpdatedResponse>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Missing or invalid application id".into()))?;

    // Validate request
    body.validate().map_err(validation_error)?;

    let service = ApplicationServiceImpl::new(state.repo.clone(), state.mailer.clone());

    let update = UpdateApplicationDto {
        status: body.status,
        priority: body.priority,
        rating: body.rating,
        internal_notes: body.internal_notes,
        interview_schedule: body.interview_schedule.map(|slot| InterviewSlotDto {
            date: slot.date,
            time: slot.time,
        }),
        updated_at: body.updated_at,
    };

    let application = service
        .update_application(id, update)
        .await
        .map_err(map_application_error)?;

    Ok(Json(ApplicationUpdatedResponse {
        success: true,
        application: ApplicationResponse::from(application),
        message: "Application updated successfully".to_string(),
    }))
}

/// Map service errors onto the HTTP error taxonomy
fn map_application_error(e: ApplicationError) -> AppError {
    match e {
        ApplicationError::NotFound => AppError::NotFound("Application not found".into()),
        ApplicationError::UnknownStatus(s) => AppError::Validation(format!("Unknown status: {}", s)),
        ApplicationError::InvalidTransition { from, to } => {
            AppError::Validation(format!("Invalid status transition: {} -> {}", from, to))
        }
        e => AppError::Internal(e.to_string()),
    }
}
