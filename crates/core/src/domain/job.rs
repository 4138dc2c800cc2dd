// Job Domain Model

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Job ID (opaque, server-assigned)
pub type JobId = String;

/// Job Status (closed set, snake_case on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Scheduled,
        JobStatus::InProgress,
        JobStatus::Completed,
        JobStatus::Cancelled,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Scheduled => "scheduled",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Job Entity (one field-service work order)
///
/// Read-only on the client: jobs are created and mutated server-side and
/// only ever replaced by re-fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub customer: String,
    pub address: String,
    pub status: JobStatus,

    /// ISO-8601 timestamp, display only
    pub scheduled_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Job {
    /// Create a job with the required fields; optional fields start empty
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        customer: impl Into<String>,
        address: impl Into<String>,
        status: JobStatus,
        scheduled_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            customer: customer.into(),
            address: address.into(),
            status,
            scheduled_at: scheduled_at.into(),
            model_url: None,
            description: None,
        }
    }

    pub fn with_model_url(mut self, url: impl Into<String>) -> Self {
        self.model_url = Some(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether a 3D model is linked to this job
    pub fn has_model(&self) -> bool {
        self.model_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    fn parsed_schedule(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.scheduled_at).ok()
    }

    /// Compact schedule for list rows, e.g. "Fri, Feb 21 09:00"
    ///
    /// Falls back to the raw string when the timestamp does not parse.
    pub fn schedule_short(&self) -> String {
        match self.parsed_schedule() {
            Some(at) => at.format("%a, %b %-d %H:%M").to_string(),
            None => self.scheduled_at.clone(),
        }
    }

    /// Long schedule for the detail screen, e.g. "Friday, February 21, 2025 at 09:00"
    pub fn schedule_long(&self) -> String {
        match self.parsed_schedule() {
            Some(at) => at.format("%A, %B %-d, %Y at %H:%M").to_string(),
            None => self.scheduled_at.clone(),
        }
    }
}
