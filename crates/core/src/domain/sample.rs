// Fallback data set, served whenever the backend cannot be used

use super::job::{Job, JobStatus};

/// The three sample jobs, ids "1", "2", "3" in that order
pub fn fallback_jobs() -> Vec<Job> {
    vec![
        Job::new(
            "1",
            "Washing machine repair - Drain issue",
            "Jane Smith",
            "123 Oak St, Apt 4B",
            JobStatus::Scheduled,
            "2025-02-21T09:00:00Z",
        )
        .with_model_url("https://example.com/models/washer.glb")
        .with_description("Customer reports F21 error, water not draining."),
        Job::new(
            "2",
            "Dryer heating element replacement",
            "Bob Johnson",
            "456 Pine Ave",
            JobStatus::InProgress,
            "2025-02-20T14:00:00Z",
        )
        .with_description("Dryer runs but no heat."),
        Job::new(
            "3",
            "Dishwasher leak inspection",
            "Maria Garcia",
            "789 Elm Rd",
            JobStatus::Completed,
            "2025-02-19T10:00:00Z",
        )
        .with_description("Water pooling under unit."),
    ]
}

/// Exact-id lookup in the fallback set
pub fn find_fallback_job(id: &str) -> Option<Job> {
    fallback_jobs().into_iter().find(|job| job.id == id)
}
