// Application Layer - Repository, view-state controllers and navigation

pub mod detail_view;
pub mod list_view;
pub mod navigation;
pub mod repository;
pub mod viewer;

// Re-exports
pub use detail_view::{DetailFetch, DetailState, FetchOutcome, JobDetailController, ModelAction};
pub use list_view::{JobListController, ListState, LoadTicket};
pub use navigation::{Navigator, Route};
pub use repository::{resolve_or_fallback, JobRepository};
pub use viewer::ViewerController;
