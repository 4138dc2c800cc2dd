// Job Source Port (Interface)
// Raw access to the remote job endpoints; decoding and fallback live in
// the application layer.

use crate::domain::Job;
use crate::error::Result;
use async_trait::async_trait;

/// Remote job backend
///
/// Implementations:
/// - HttpJobSource: `GET {base}/api/jobs` and `GET {base}/api/jobs/{id}`
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch the collection endpoint and return its JSON body
    ///
    /// # Errors
    /// - AppError::Transport if the request could not be completed
    /// - AppError::Status on a non-success status
    /// - AppError::Serialization if the body is not JSON
    async fn fetch_collection(&self) -> Result<serde_json::Value>;

    /// Fetch a single job record
    ///
    /// # Errors
    /// Same as `fetch_collection`, plus AppError::Serialization when the
    /// body is not a valid job.
    async fn fetch_record(&self, id: &str) -> Result<Job>;
}
