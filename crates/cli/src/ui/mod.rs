// Terminal presentation layer

pub mod components;
pub mod screens;

pub use screens::{render_job_detail, render_job_list, render_job_table, render_viewer};
