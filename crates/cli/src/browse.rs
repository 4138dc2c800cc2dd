// Interactive browse session: the navigation graph driven by typed commands

use crate::ui::{render_job_detail, render_job_list, render_viewer};
use fieldsync_core::application::{
    JobDetailController, JobListController, JobRepository, ModelAction, Navigator, Route,
    ViewerController,
};
use tracing::debug;

/// Parsed user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Back,
    Refresh,
    /// 1-based position in the list
    OpenIndex(usize),
    OpenId(String),
    OpenModel,
    Rate(u8),
    Note(String),
    Submit,
    Help,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        match word {
            "q" | "quit" | "exit" => Command::Quit,
            "b" | "back" => Command::Back,
            "r" | "refresh" => Command::Refresh,
            "m" | "model" => Command::OpenModel,
            "s" | "submit" => Command::Submit,
            "h" | "help" | "?" => Command::Help,
            "open" if !rest.is_empty() => Command::OpenId(rest.to_string()),
            "rate" => match rest.parse() {
                Ok(n) => Command::Rate(n),
                Err(_) => Command::Unknown(input.to_string()),
            },
            "note" => Command::Note(rest.to_string()),
            _ => match word.parse() {
                Ok(n) => Command::OpenIndex(n),
                Err(_) => Command::Unknown(input.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct BrowseSession {
    repo: JobRepository,
    nav: Navigator,
    list: JobListController,
    detail: Option<JobDetailController>,
    viewer: Option<ViewerController>,
    notice: Option<String>,
}

impl BrowseSession {
    /// Mount the job list and wait for its first load
    pub async fn start(repo: JobRepository) -> Self {
        let list = JobListController::mount_and_load(&repo).await;
        Self {
            repo,
            nav: Navigator::new(),
            list,
            detail: None,
            viewer: None,
            notice: None,
        }
    }

    pub fn current_route(&self) -> &Route {
        self.nav.current()
    }

    pub fn detail(&self) -> Option<&JobDetailController> {
        self.detail.as_ref()
    }

    pub fn viewer(&self) -> Option<&ViewerController> {
        self.viewer.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn render(&self) -> String {
        let mut out = match (self.nav.current(), &self.detail, &self.viewer) {
            (Route::Viewer3D { .. }, _, Some(viewer)) => render_viewer(viewer),
            (Route::JobDetail { .. }, Some(detail), _) => render_job_detail(detail),
            _ => render_job_list(&self.list),
        };
        if let Some(notice) = &self.notice {
            out.push_str(&format!("\n! {}\n", notice));
        }
        out.push_str(&format!("\n{}\n", self.hint()));
        out
    }

    fn hint(&self) -> &'static str {
        match self.nav.current() {
            Route::JobList => "<n> open job · open <id> · r refresh · q quit",
            Route::JobDetail { .. } => "m open model · r reload · b back · q quit",
            Route::Viewer3D { .. } => "rate <1-5> · note <text> · submit · b back · q quit",
        }
    }

    pub async fn handle(&mut self, input: &str) -> Step {
        self.notice = None;
        let command = Command::parse(input);
        debug!(?command, route = self.nav.current().name(), "Browse command");

        match (command, self.nav.current().clone()) {
            (Command::Quit, _) => return Step::Quit,
            (Command::Help, _) => self.notice = Some(self.hint().to_string()),
            (Command::Back, _) => self.back(),

            (Command::Refresh, Route::JobList) => self.list.refresh(&self.repo).await,
            (Command::OpenIndex(n), Route::JobList) => {
                let id = n
                    .checked_sub(1)
                    .and_then(|i| self.list.jobs().get(i))
                    .map(|job| job.id.clone());
                match id {
                    Some(id) => self.open_detail(id).await,
                    None => self.notice = Some(format!("No job at position {}", n)),
                }
            }
            (Command::OpenId(id), Route::JobList) => self.open_detail(id).await,

            (Command::Refresh, Route::JobDetail { job_id }) => {
                if let Some(detail) = self.detail.as_mut() {
                    let fetch = detail.change_job(job_id);
                    let outcome = fetch.run(&self.repo).await;
                    detail.commit(&fetch, outcome);
                }
            }
            (Command::OpenModel, Route::JobDetail { .. }) => self.open_viewer(),

            (Command::Rate(n), Route::Viewer3D { .. }) => {
                self.with_viewer(|viewer| viewer.select_rating(n))
            }
            (Command::Note(text), Route::Viewer3D { .. }) => {
                self.with_viewer(|viewer| viewer.set_notes(text))
            }
            (Command::Submit, Route::Viewer3D { .. }) => {
                self.with_viewer(|viewer| viewer.submit_feedback())
            }

            (Command::Unknown(text), _) => self.notice = Some(format!("Unknown command: {}", text)),
            (command, route) => {
                self.notice = Some(format!("{:?} is not available on {}", command, route.name()))
            }
        }
        Step::Continue
    }

    async fn open_detail(&mut self, job_id: String) {
        if let Err(e) = self.nav.push(Route::JobDetail {
            job_id: job_id.clone(),
        }) {
            self.notice = Some(e.to_string());
            return;
        }
        let detail = JobDetailController::mount_and_load(job_id, &self.repo).await;
        self.detail = Some(detail);
    }

    fn open_viewer(&mut self) {
        let action = match &self.detail {
            Some(detail) => detail.model_action(),
            None => ModelAction::Unavailable,
        };
        match action {
            ModelAction::OpenModel { job_id, model_url } => {
                let route = Route::Viewer3D {
                    job_id: job_id.clone(),
                    model_url: model_url.clone(),
                };
                match self.nav.push(route) {
                    Ok(()) => self.viewer = Some(ViewerController::mount(job_id, model_url)),
                    Err(e) => self.notice = Some(e.to_string()),
                }
            }
            ModelAction::NoModelLinked => {
                self.notice = Some("No 3D model linked to this job.".to_string())
            }
            ModelAction::Unavailable => self.notice = Some("Job is not loaded".to_string()),
        }
    }

    fn back(&mut self) {
        let leaving = self.nav.current().clone();
        if !self.nav.back() {
            self.notice = Some("Already at the job list".to_string());
            return;
        }
        match leaving {
            Route::Viewer3D { .. } => self.viewer = None,
            Route::JobDetail { .. } => {
                if let Some(detail) = self.detail.take() {
                    detail.teardown();
                }
            }
            Route::JobList => {}
        }
    }

    fn with_viewer<F>(&mut self, f: F)
    where
        F: FnOnce(&mut ViewerController) -> fieldsync_core::Result<()>,
    {
        if let Some(viewer) = self.viewer.as_mut() {
            if let Err(e) = f(viewer) {
                self.notice = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsync_infra_http::{HttpConfig, HttpJobSource};
    use std::sync::Arc;

    // Nothing listens on the discard port, so every fetch falls back
    async fn offline_session() -> BrowseSession {
        let source = HttpJobSource::new(HttpConfig::new("http://127.0.0.1:9").unwrap());
        BrowseSession::start(JobRepository::new(Arc::new(source))).await
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse(" q "), Command::Quit);
        assert_eq!(Command::parse("2"), Command::OpenIndex(2));
        assert_eq!(Command::parse("open abc-1"), Command::OpenId("abc-1".into()));
        assert_eq!(Command::parse("rate 4"), Command::Rate(4));
        assert_eq!(Command::parse("note mesh ok"), Command::Note("mesh ok".into()));
        assert_eq!(Command::parse("rate x"), Command::Unknown("rate x".into()));
        assert_eq!(Command::parse("dance"), Command::Unknown("dance".into()));
    }

    #[tokio::test]
    async fn test_browse_to_viewer_and_back() {
        let mut session = offline_session().await;
        assert_eq!(session.current_route(), &Route::JobList);

        session.handle("1").await;
        assert_eq!(
            session.current_route(),
            &Route::JobDetail { job_id: "1".into() }
        );
        assert_eq!(session.detail().unwrap().job().unwrap().customer, "Jane Smith");

        session.handle("m").await;
        assert_eq!(session.current_route().name(), "Viewer3D");

        session.handle("rate 5").await;
        session.handle("submit").await;
        assert!(session.viewer().unwrap().feedback().is_submitted());

        session.handle("submit").await;
        assert_eq!(session.notice(), Some("Domain error: Feedback already submitted"));

        session.handle("b").await;
        session.handle("b").await;
        assert_eq!(session.current_route(), &Route::JobList);
        assert!(session.detail().is_none());
        assert!(session.viewer().is_none());
    }

    #[tokio::test]
    async fn test_job_without_model_stays_on_detail() {
        let mut session = offline_session().await;
        session.handle("3").await;
        session.handle("m").await;
        assert_eq!(session.current_route().name(), "JobDetail");
        assert_eq!(session.notice(), Some("No 3D model linked to this job."));
    }

    #[tokio::test]
    async fn test_unknown_job_and_bad_index() {
        let mut session = offline_session().await;
        session.handle("9").await;
        assert_eq!(session.notice(), Some("No job at position 9"));

        session.handle("open 999").await;
        colored::control::set_override(false);
        assert!(session.render().contains("Job not found"));
    }

    #[tokio::test]
    async fn test_quit() {
        let mut session = offline_session().await;
        assert_eq!(session.handle("q").await, Step::Quit);
    }
}
