// Port Layer - Interfaces for external dependencies

pub mod job_source;

// Re-exports
pub use job_source::JobSource;
