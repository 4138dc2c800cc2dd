// Screens - compose components from controller state

use super::components::{button, card, header, label, muted, status_badge, ButtonVariant};
use colored::Colorize;
use fieldsync_core::application::{
    DetailState, JobDetailController, JobListController, ModelAction, ViewerController,
};
use fieldsync_core::domain::{Job, QualityRating};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "#")]
    index: usize,
    id: String,
    title: String,
    status: String,
    customer: String,
    scheduled: String,
}

pub fn render_job_list(list: &JobListController) -> String {
    let mut out = header("Jobs", false);
    out.push('\n');

    if list.is_loading() {
        out.push_str(&format!("{}\n", muted("Loading jobs…")));
        return out;
    }
    if list.is_refreshing() {
        out.push_str(&format!("{}\n\n", muted("Refreshing…")));
    }
    if list.jobs().is_empty() {
        out.push_str(&format!("{}\n", "No jobs found".bold()));
        out.push_str(&format!("{}\n", muted("Refresh with 'r'")));
        return out;
    }

    for (i, job) in list.jobs().iter().enumerate() {
        out.push_str(&job_card(i + 1, job));
    }
    out
}

fn job_card(index: usize, job: &Job) -> String {
    let lines = vec![
        format!("{} {}  {}", format!("{}.", index).dimmed(), job.title.bold(), "›".dimmed()),
        status_badge(job.status),
        job.customer.clone(),
        muted(&job.address).to_string(),
        muted(&job.schedule_short()).to_string(),
    ];
    card(&lines, Some(job.status.style().rgb()))
}

/// Plain table variant of the list, for scripting
pub fn render_job_table(jobs: &[Job]) -> String {
    let rows: Vec<JobRow> = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| JobRow {
            index: i + 1,
            id: job.id.clone(),
            title: job.title.clone(),
            status: job.status.label().to_string(),
            customer: job.customer.clone(),
            scheduled: job.schedule_short(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn render_job_detail(detail: &JobDetailController) -> String {
    let job = match detail.state() {
        DetailState::Found(job) => job,
        state => {
            let mut out = header("Job", true);
            let message = if matches!(state, DetailState::Loading) {
                "Loading…"
            } else {
                "Job not found"
            };
            out.push_str(&format!("\n{}\n", muted(message)));
            return out;
        }
    };

    let mut out = header(&job.title, true);
    out.push('\n');

    let mut lines = vec![
        status_badge(job.status),
        String::new(),
        label("Customer").to_string(),
        job.customer.clone(),
        label("Address").to_string(),
        job.address.clone(),
        label("Scheduled").to_string(),
        job.schedule_long(),
    ];
    if let Some(description) = job.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(label("Description").to_string());
        lines.push(description.to_string());
    }
    out.push_str(&card(&lines, None));

    match detail.model_action() {
        ModelAction::OpenModel { .. } => {
            out.push_str(&format!(
                "{}  {}\n",
                button("Open 3D model", ButtonVariant::Primary, false),
                muted("(m)")
            ));
        }
        ModelAction::NoModelLinked => {
            out.push_str(&card(
                &[muted("No 3D model linked to this job.").to_string()],
                None,
            ));
        }
        ModelAction::Unavailable => {}
    }
    out
}

pub fn render_viewer(viewer: &ViewerController) -> String {
    let mut out = header("3D Model", true);
    out.push('\n');

    out.push_str(&card(
        &[
            "3D viewer".bold().to_string(),
            format!("Job #{}", viewer.job_id()),
            muted(viewer.model_url()).to_string(),
            muted("Model rendering is not available in the terminal.").to_string(),
        ],
        None,
    ));

    let feedback = viewer.feedback();
    let submitted = feedback.is_submitted();
    let selected = feedback.rating().map(|r| r.value());

    let ratings: Vec<String> = (QualityRating::MIN..=QualityRating::MAX)
        .map(|n| {
            let variant = if selected == Some(n) {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Outline
            };
            button(&n.to_string(), variant, submitted)
        })
        .collect();

    let notes = if feedback.notes().is_empty() {
        muted("e.g. Mesh looks correct, textures missing...").to_string()
    } else {
        feedback.notes().to_string()
    };

    let submit_title = if submitted {
        "Thanks for your feedback"
    } else {
        "Submit feedback"
    };

    let mut lines = vec![
        "Model quality feedback".bold().to_string(),
        muted("Help us improve: rate the model and add notes.").to_string(),
        String::new(),
        label("Quality (1–5)").to_string(),
        ratings.join(" "),
        label("Notes (optional)").to_string(),
        notes,
        String::new(),
        button(submit_title, ButtonVariant::Primary, submitted),
    ];
    if submitted {
        lines.push(muted("Your feedback helps improve model quality.").to_string());
    }
    out.push_str(&card(&lines, None));
    out
}
