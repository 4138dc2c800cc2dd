// Model quality feedback (viewer screen form)

use super::error::{DomainError, Result};

/// Quality rating, 1 (poor) to 5 (excellent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QualityRating(u8);

impl QualityRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Feedback form state
///
/// Submission is local; once submitted the form is frozen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFeedback {
    rating: Option<QualityRating>,
    notes: String,
    submitted: bool,
}

impl ModelFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(&self) -> Option<QualityRating> {
        self.rating
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn select_rating(&mut self, value: u8) -> Result<()> {
        self.ensure_open()?;
        self.rating = Some(QualityRating::new(value)?);
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.notes = notes.into();
        Ok(())
    }

    /// Rating and notes are both optional
    pub fn submit(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.submitted = true;
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.submitted {
            return Err(DomainError::FeedbackAlreadySubmitted);
        }
        Ok(())
    }
}
