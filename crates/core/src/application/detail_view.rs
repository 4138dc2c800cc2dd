// Job Detail view-state controller
//
// Loading -> Found | NotFound. Every fetch carries a child token of the
// screen token; teardown or a job id change cancels it, and a cancelled
// fetch never commits.

use super::repository::JobRepository;
use crate::domain::{Job, JobId};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Detail screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Found(Job),
    /// Neither the backend nor the fallback set knows the job (terminal)
    NotFound,
}

/// What the "view model" slot of the detail screen offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelAction {
    /// "Open 3D model" enabled; navigates with these route params
    OpenModel { job_id: JobId, model_url: String },
    /// Job loaded but no model linked
    NoModelLinked,
    /// Still loading or not found
    Unavailable,
}

/// Result of running a detail fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Completed(Option<Job>),
    Cancelled,
}

/// One in-flight detail request
pub struct DetailFetch {
    job_id: JobId,
    token: CancellationToken,
}

impl DetailFetch {
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run the fetch, racing it against cancellation
    ///
    /// A cancelled fetch drops the in-flight request.
    pub async fn run(&self, repo: &JobRepository) -> FetchOutcome {
        if self.token.is_cancelled() {
            return FetchOutcome::Cancelled;
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => FetchOutcome::Cancelled,
            job = repo.fetch_job_by_id(&self.job_id) => FetchOutcome::Completed(job),
        }
    }
}

pub struct JobDetailController {
    job_id: JobId,
    state: DetailState,
    screen_token: CancellationToken,
    fetch_token: CancellationToken,
}

impl JobDetailController {
    /// Mount the screen for `job_id`; the returned fetch must be run and
    /// committed by the caller
    pub fn mount(job_id: impl Into<JobId>) -> (Self, DetailFetch) {
        let screen_token = CancellationToken::new();
        let fetch_token = screen_token.child_token();
        let job_id = job_id.into();
        let fetch = DetailFetch {
            job_id: job_id.clone(),
            token: fetch_token.clone(),
        };
        let controller = Self {
            job_id,
            state: DetailState::Loading,
            screen_token,
            fetch_token,
        };
        (controller, fetch)
    }

    /// Mount and load in one step
    pub async fn mount_and_load(job_id: impl Into<JobId>, repo: &JobRepository) -> Self {
        let (mut controller, fetch) = Self::mount(job_id);
        let outcome = fetch.run(repo).await;
        controller.commit(&fetch, outcome);
        controller
    }

    /// Route parameter changed: cancel the outstanding fetch and start over
    pub fn change_job(&mut self, job_id: impl Into<JobId>) -> DetailFetch {
        self.fetch_token.cancel();
        self.fetch_token = self.screen_token.child_token();
        self.job_id = job_id.into();
        self.state = DetailState::Loading;
        DetailFetch {
            job_id: self.job_id.clone(),
            token: self.fetch_token.clone(),
        }
    }

    /// Handle that tears the screen down from elsewhere (e.g. navigation)
    pub fn teardown_handle(&self) -> CancellationToken {
        self.screen_token.clone()
    }

    /// Screen unmounted; outstanding fetches will not commit
    pub fn teardown(&self) {
        self.screen_token.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.screen_token.is_cancelled()
    }

    /// Commit a fetch result
    ///
    /// Returns false when the fetch was cancelled or belongs to a job id
    /// this screen no longer shows.
    pub fn commit(&mut self, fetch: &DetailFetch, outcome: FetchOutcome) -> bool {
        if fetch.is_cancelled() || fetch.job_id != self.job_id {
            debug!(job_id = %fetch.job_id, "Discarding stale job detail response");
            return false;
        }
        self.state = match outcome {
            FetchOutcome::Cancelled => return false,
            FetchOutcome::Completed(Some(job)) => DetailState::Found(job),
            FetchOutcome::Completed(None) => DetailState::NotFound,
        };
        true
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn job(&self) -> Option<&Job> {
        match &self.state {
            DetailState::Found(job) => Some(job),
            _ => None,
        }
    }

    pub fn model_action(&self) -> ModelAction {
        match self.job() {
            Some(job) => match job.model_url.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => ModelAction::OpenModel {
                    job_id: job.id.clone(),
                    model_url: url.to_string(),
                },
                None => ModelAction::NoModelLinked,
            },
            None => ModelAction::Unavailable,
        }
    }
}

impl Drop for JobDetailController {
    fn drop(&mut self) {
        self.screen_token.cancel();
    }
}
