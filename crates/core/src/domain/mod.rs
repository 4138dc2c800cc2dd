// Domain Layer - Pure entities and lookup tables

pub mod collection;
pub mod error;
pub mod feedback;
pub mod job;
pub mod sample;
pub mod status;

// Re-exports
pub use collection::decode_collection;
pub use error::DomainError;
pub use feedback::{ModelFeedback, QualityRating};
pub use job::{Job, JobId, JobStatus};
pub use sample::{fallback_jobs, find_fallback_job};
pub use status::{StatusStyle, STATUS_PALETTE};
