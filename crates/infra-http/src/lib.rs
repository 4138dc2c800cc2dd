// FieldSync Infrastructure - HTTP Adapter
// Implements: JobSource over the backend REST endpoints

mod config;
mod job_source;

pub use config::{HttpConfig, API_URL_ENV, DEFAULT_API_URL};
pub use job_source::HttpJobSource;

// Note: reqwest::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<reqwest::Error> for AppError here)
