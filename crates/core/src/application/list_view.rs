// Job List view-state controller
//
// InitialLoading -> Loaded, Loaded -> Refreshing -> Loaded.
// Refreshes are not de-duplicated: each one issues a new request with a
// fresh ticket, and only the most recently issued ticket may commit.

use super::repository::JobRepository;
use crate::domain::Job;
use tracing::debug;

/// Identifies one issued list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// List screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// First load in flight, nothing to show yet
    InitialLoading,
    /// Data shown (possibly empty)
    Loaded(Vec<Job>),
    /// Data shown while a newer request is in flight
    Refreshing(Vec<Job>),
}

pub struct JobListController {
    state: ListState,
    latest: LoadTicket,
}

impl JobListController {
    /// Mount the screen; the returned ticket belongs to the initial load
    pub fn mount() -> (Self, LoadTicket) {
        let ticket = LoadTicket(1);
        let controller = Self {
            state: ListState::InitialLoading,
            latest: ticket,
        };
        (controller, ticket)
    }

    /// Mount and run the initial load to completion
    pub async fn mount_and_load(repo: &JobRepository) -> Self {
        let (mut controller, ticket) = Self::mount();
        let jobs = repo.fetch_jobs().await;
        controller.finish(ticket, jobs);
        controller
    }

    /// Start a user-initiated refresh
    ///
    /// Loaded data stays visible. Calling this while a request is already
    /// in flight is allowed and supersedes the earlier request.
    pub fn begin_refresh(&mut self) -> LoadTicket {
        self.latest = LoadTicket(self.latest.0 + 1);
        let state = std::mem::replace(&mut self.state, ListState::InitialLoading);
        self.state = match state {
            ListState::Loaded(jobs) | ListState::Refreshing(jobs) => ListState::Refreshing(jobs),
            ListState::InitialLoading => ListState::InitialLoading,
        };
        self.latest
    }

    /// Commit a completed request
    ///
    /// Returns false (state untouched) when a newer request has been issued
    /// since `ticket`.
    pub fn finish(&mut self, ticket: LoadTicket, jobs: Vec<Job>) -> bool {
        if ticket != self.latest {
            debug!(
                ticket = ticket.0,
                latest = self.latest.0,
                "Discarding superseded job list response"
            );
            return false;
        }
        self.state = ListState::Loaded(jobs);
        true
    }

    /// Refresh and wait for the result
    pub async fn refresh(&mut self, repo: &JobRepository) {
        let ticket = self.begin_refresh();
        let jobs = repo.fetch_jobs().await;
        self.finish(ticket, jobs);
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn jobs(&self) -> &[Job] {
        match &self.state {
            ListState::Loaded(jobs) | ListState::Refreshing(jobs) => jobs,
            ListState::InitialLoading => &[],
        }
    }

    /// Spinner: initial load with nothing to show
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::InitialLoading)
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self.state, ListState::Refreshing(_))
    }

    /// Loaded, but the result set is empty
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, ListState::Loaded(jobs) if jobs.is_empty())
    }

    /// Jobs are looked up by id only
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs().iter().find(|job| job.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{fallback_jobs, JobStatus};

    fn job(id: &str) -> Job {
        Job::new(id, "t", "c", "a", JobStatus::Scheduled, "2025-01-01T00:00:00Z")
    }

    #[test]
    fn test_initial_load() {
        let (mut list, ticket) = JobListController::mount();
        assert!(list.is_loading());
        assert!(list.jobs().is_empty());
        assert!(!list.is_empty());

        assert!(list.finish(ticket, fallback_jobs()));
        assert!(!list.is_loading());
        assert_eq!(list.jobs().len(), 3);
    }

    #[test]
    fn test_refresh_keeps_existing_data_visible() {
        let (mut list, ticket) = JobListController::mount();
        list.finish(ticket, vec![job("a")]);

        let refresh = list.begin_refresh();
        assert!(list.is_refreshing());
        assert_eq!(list.jobs()[0].id, "a");

        list.finish(refresh, vec![job("b"), job("c")]);
        assert!(!list.is_refreshing());
        assert_eq!(list.jobs().len(), 2);
        assert!(list.job("c").is_some());
        assert!(list.job("a").is_none());
    }

    #[test]
    fn test_latest_issued_refresh_wins_regardless_of_arrival() {
        let (mut list, ticket) = JobListController::mount();
        list.finish(ticket, vec![job("initial")]);

        let first = list.begin_refresh();
        let second = list.begin_refresh();

        // Second response arrives first
        assert!(list.finish(second, vec![job("second")]));
        assert!(!list.finish(first, vec![job("first")]));
        assert_eq!(list.jobs()[0].id, "second");
    }

    #[test]
    fn test_stale_response_does_not_end_refresh() {
        let (mut list, ticket) = JobListController::mount();
        list.finish(ticket, vec![job("initial")]);

        let first = list.begin_refresh();
        let second = list.begin_refresh();

        assert!(!list.finish(first, vec![job("first")]));
        assert!(list.is_refreshing());
        assert_eq!(list.jobs()[0].id, "initial");

        assert!(list.finish(second, vec![]));
        assert!(list.is_empty());
    }

    #[test]
    fn test_refresh_during_initial_load_supersedes_it() {
        let (mut list, initial) = JobListController::mount();
        let refresh = list.begin_refresh();
        assert!(list.is_loading());

        assert!(!list.finish(initial, vec![job("old")]));
        assert!(list.is_loading());
        assert!(list.finish(refresh, vec![job("new")]));
        assert_eq!(list.jobs()[0].id, "new");
    }
}
