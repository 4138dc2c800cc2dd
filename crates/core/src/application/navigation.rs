// Navigation Graph - three-screen stack (list -> detail -> viewer)

use crate::domain::{DomainError, JobId};
use crate::error::Result;
use tracing::debug;

/// A screen plus its route parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    JobList,
    JobDetail { job_id: JobId },
    Viewer3D { job_id: JobId, model_url: String },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::JobList => "JobList",
            Route::JobDetail { .. } => "JobDetail",
            Route::Viewer3D { .. } => "Viewer3D",
        }
    }
}

/// Stack navigator rooted at the job list
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::JobList],
        }
    }

    pub fn current(&self) -> &Route {
        // The root is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a route on top of the current one
    ///
    /// Only list -> detail and detail -> viewer (same job) are valid.
    pub fn push(&mut self, route: Route) -> Result<()> {
        let allowed = match (self.current(), &route) {
            (Route::JobList, Route::JobDetail { .. }) => true,
            (Route::JobDetail { job_id }, Route::Viewer3D { job_id: target, .. }) => {
                job_id == target
            }
            _ => false,
        };
        if !allowed {
            return Err(DomainError::InvalidRouteTransition {
                from: self.current().name().to_string(),
                to: route.name().to_string(),
            }
            .into());
        }
        debug!(route = route.name(), depth = self.stack.len() + 1, "Navigate");
        self.stack.push(route);
        Ok(())
    }

    /// Pop the current route; a no-op at the root
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str) -> Route {
        Route::JobDetail { job_id: id.into() }
    }

    fn viewer(id: &str) -> Route {
        Route::Viewer3D {
            job_id: id.into(),
            model_url: "https://example.com/m.glb".into(),
        }
    }

    #[test]
    fn test_full_path_and_back() {
        let mut nav = Navigator::new();
        nav.push(detail("1")).unwrap();
        nav.push(viewer("1")).unwrap();
        assert_eq!(nav.depth(), 3);
        assert_eq!(nav.current().name(), "Viewer3D");

        assert!(nav.back());
        assert_eq!(nav.current(), &detail("1"));
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::JobList);
        assert!(!nav.back());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_viewer_requires_matching_job() {
        let mut nav = Navigator::new();
        nav.push(detail("1")).unwrap();
        assert!(nav.push(viewer("2")).is_err());
        assert_eq!(nav.current(), &detail("1"));
    }

    #[test]
    fn test_invalid_transitions() {
        let mut nav = Navigator::new();
        let err = nav.push(viewer("1")).unwrap_err();
        assert!(err.to_string().contains("JobList -> Viewer3D"));
        assert!(nav.push(Route::JobList).is_err());

        nav.push(detail("1")).unwrap();
        assert!(nav.push(detail("2")).is_err());
    }
}
