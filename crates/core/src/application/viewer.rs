// 3D Viewer screen state
//
// The renderer itself is a placeholder; the screen carries its route
// parameters and the model quality feedback form.

use crate::domain::{JobId, ModelFeedback};
use crate::error::Result;
use tracing::info;

pub struct ViewerController {
    job_id: JobId,
    model_url: String,
    feedback: ModelFeedback,
}

impl ViewerController {
    pub fn mount(job_id: impl Into<JobId>, model_url: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            model_url: model_url.into(),
            feedback: ModelFeedback::new(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn model_url(&self) -> &str {
        &self.model_url
    }

    pub fn feedback(&self) -> &ModelFeedback {
        &self.feedback
    }

    pub fn select_rating(&mut self, value: u8) -> Result<()> {
        self.feedback.select_rating(value)?;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<()> {
        self.feedback.set_notes(notes)?;
        Ok(())
    }

    /// Submit the feedback form (kept on the device)
    pub fn submit_feedback(&mut self) -> Result<()> {
        self.feedback.submit()?;
        info!(
            job_id = %self.job_id,
            rating = ?self.feedback.rating().map(|r| r.value()),
            has_notes = !self.feedback.notes().is_empty(),
            "Model feedback submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::AppError;

    #[test]
    fn test_viewer_feedback_flow() {
        let mut viewer = ViewerController::mount("1", "https://example.com/models/washer.glb");
        assert_eq!(viewer.job_id(), "1");
        assert!(viewer.model_url().ends_with("washer.glb"));

        viewer.select_rating(3).unwrap();
        viewer.set_notes("Textures missing").unwrap();
        viewer.submit_feedback().unwrap();
        assert!(viewer.feedback().is_submitted());

        let err = viewer.submit_feedback().unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::FeedbackAlreadySubmitted)
        ));
    }

    #[test]
    fn test_invalid_rating_is_reported() {
        let mut viewer = ViewerController::mount("1", "u");
        let err = viewer.select_rating(7).unwrap_err();
        assert!(err.to_string().contains("Invalid quality rating"));
    }
}
