//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{
    ApplicationDto, ApplicationPageDto, InterviewScheduleDto,
};

/// Application response
#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub job_id: Option<String>,
    pub status: String,
    pub priority: Option<String>,
    pub rating: Option<i32>,
    pub internal_notes: Option<String>,
    pub interview_schedule: Option<InterviewScheduleResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ApplicationDto> for ApplicationResponse {
    fn from(dto: ApplicationDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            job_id: dto.job_id,
            status: dto.status,
            priority: dto.priority,
            rating: dto.rating,
            internal_notes: dto.internal_notes,
            interview_schedule: dto.interview_schedule.map(InterviewScheduleResponse::from),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Interview schedule embedded in an application response
#[derive(Debug, Serialize)]
pub struct InterviewScheduleResponse {
    pub date: String,
    pub time: String,
    pub scheduled_at: String,
}

impl From<InterviewScheduleDto> for InterviewScheduleResponse {
    fn from(dto: InterviewScheduleDto) -> Self {
        Self {
            date: dto.date,
            time: dto.time,
            scheduled_at: dto.scheduled_at,
        }
    }
}

/// Pagination metadata for list responses
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

/// List response: one page of applications plus pagination metadata
#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationResponse>,
    pub pagination: PaginationMeta,
}

impl From<ApplicationPageDto> for ApplicationListResponse {
    fn from(page: ApplicationPageDto) -> Self {
        Self {
            applications: page
                .applications
                .into_iter()
                .map(ApplicationResponse::from)
                .collect(),
            pagination: PaginationMeta {
                page: page.page,
                limit: page.limit,
                total: page.total,
                total_pages: page.total_pages,
            },
        }
    }
}

/// Single-application envelope
#[derive(Debug, Serialize)]
pub struct ApplicationEnvelope {
    pub success: bool,
    pub application: ApplicationResponse,
}

/// Update result envelope
#[derive(Debug, Serialize)]
pub struct ApplicationUpdatedResponse {
    pub success: bool,
    pub application: ApplicationResponse,
    pub message: String,
}
