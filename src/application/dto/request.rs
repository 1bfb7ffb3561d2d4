//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Application list query parameters
///
/// All parameters are optional and string-encoded on the wire.
#[derive(Debug, Deserialize)]
pub struct ApplicationQueryParams {
    /// Exact status match; `all` disables the filter
    pub status: Option<String>,

    /// Exact match against the job-listing reference
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,

    /// Case-insensitive substring match on candidate name or email
    pub search: Option<String>,

    /// 1-based page number (default 1)
    pub page: Option<i64>,

    /// Page size (default 20)
    pub limit: Option<i64>,
}

/// Partial review-update request
///
/// Only fields present in the payload are applied; a present falsy value
/// (zero rating, empty notes) is still applied.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateApplicationRequest {
    pub status: Option<String>,

    pub priority: Option<String>,

    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    pub rating: Option<i32>,

    #[serde(rename = "internalNotes")]
    pub internal_notes: Option<String>,

    #[serde(rename = "interviewSchedule")]
    pub interview_schedule: Option<InterviewScheduleRequest>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// Interview slot in an update payload; the combined timestamp is derived
/// server-side
#[derive(Debug, Deserialize)]
pub struct InterviewScheduleRequest {
    pub date: NaiveDate,

    /// Accepts `HH:MM` (as the admin UI sends it) or `HH:MM:SS`
    #[serde(deserialize_with = "deserialize_slot_time")]
    pub time: NaiveTime,
}

fn deserialize_slot_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
        .map_err(serde::de::Error::custom)
}
