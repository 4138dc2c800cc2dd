// Job Repository - fetch with fallback
//
// Callers never see a fetch failure: every error coming out of the source
// is swallowed and replaced with the sample data set.

use crate::domain::{decode_collection, fallback_jobs, find_fallback_job, Job};
use crate::error::{AppError, Result};
use crate::port::JobSource;
use std::collections::HashSet;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolve a fetch result, substituting `fallback` on any error
///
/// The error is recorded at debug level and otherwise discarded.
pub fn resolve_or_fallback<T, E, F>(result: std::result::Result<T, E>, what: &str, fallback: F) -> T
where
    E: Display,
    F: FnOnce() -> T,
{
    match result {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, what, "Fetch failed, serving fallback data");
            fallback()
        }
    }
}

/// Read-only job repository backed by a remote source
#[derive(Clone)]
pub struct JobRepository {
    source: Arc<dyn JobSource>,
}

impl JobRepository {
    pub fn new(source: Arc<dyn JobSource>) -> Self {
        Self { source }
    }

    /// Fetch all jobs
    ///
    /// Returns the live collection when the backend answers successfully,
    /// otherwise the three fallback jobs. Never fails.
    pub async fn fetch_jobs(&self) -> Vec<Job> {
        let result = self.fetch_jobs_strict().await;
        let jobs = resolve_or_fallback(result, "jobs", fallback_jobs);
        warn_on_duplicate_ids(&jobs);
        jobs
    }

    /// Fetch one job by id
    ///
    /// On any backend failure the fallback set is searched by exact id;
    /// `None` means neither source knows the job.
    pub async fn fetch_job_by_id(&self, id: &str) -> Option<Job> {
        let result = self.source.fetch_record(id).await.map(Some);
        resolve_or_fallback(result, "job", || find_fallback_job(id))
    }

    async fn fetch_jobs_strict(&self) -> Result<Vec<Job>> {
        let body = self.source.fetch_collection().await?;
        decode_collection(body).map_err(AppError::from)
    }
}

fn warn_on_duplicate_ids(jobs: &[Job]) {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        if !seen.insert(job.id.as_str()) {
            warn!(job_id = %job.id, "Duplicate job id in fetch result");
        }
    }
}
