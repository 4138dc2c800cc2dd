//! FieldSync CLI - terminal front end for the field-service job list
//!
//! Composition root: wires the HTTP job source into the repository and
//! renders the list, detail and model viewer screens.

mod browse;
mod logging;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use fieldsync_core::application::{
    JobDetailController, JobListController, JobRepository, ModelAction, ViewerController,
};
use fieldsync_infra_http::{HttpConfig, HttpJobSource};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::browse::{BrowseSession, Step};
use crate::ui::{render_job_detail, render_job_list, render_job_table, render_viewer};

#[derive(Parser)]
#[command(name = "fieldsync")]
#[command(about = "FieldSync field-service jobs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL [default: $FIELDSYNC_API_URL, then http://localhost:8000]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List jobs
    List {
        /// Render as a table instead of cards
        #[arg(long)]
        table: bool,

        /// Print the jobs as JSON
        #[arg(long, conflicts_with = "table")]
        json: bool,
    },

    /// Show one job
    Show {
        /// Job ID
        job_id: String,
    },

    /// Open the model viewer for a job and optionally leave feedback
    Model {
        /// Job ID
        job_id: String,

        /// Quality rating (1-5)
        #[arg(short, long)]
        rating: Option<u8>,

        /// Feedback notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Submit the feedback form
        #[arg(long)]
        submit: bool,
    },

    /// Browse interactively (list -> detail -> viewer)
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    let config = match cli.api_url.as_deref() {
        Some(url) => HttpConfig::new(url).context("Invalid --api-url")?,
        None => HttpConfig::from_env().context("Invalid FIELDSYNC_API_URL")?,
    };
    info!(api_url = %config.base_url(), "FieldSync CLI v{}", fieldsync_core::VERSION);

    let repo = JobRepository::new(Arc::new(HttpJobSource::new(config)));

    match cli.command {
        Commands::List { table, json } => {
            let list = JobListController::mount_and_load(&repo).await;

            if json {
                let out = serde_json::to_string_pretty(list.jobs())
                    .context("Failed to serialize jobs")?;
                println!("{}", out);
            } else if table {
                println!("{}", render_job_table(list.jobs()));
            } else {
                print!("{}", render_job_list(&list));
            }
        }

        Commands::Show { job_id } => {
            let detail = JobDetailController::mount_and_load(job_id, &repo).await;
            print!("{}", render_job_detail(&detail));
        }

        Commands::Model {
            job_id,
            rating,
            notes,
            submit,
        } => {
            let detail = JobDetailController::mount_and_load(job_id, &repo).await;

            match detail.model_action() {
                ModelAction::OpenModel { job_id, model_url } => {
                    let mut viewer = ViewerController::mount(job_id, model_url);
                    if let Some(rating) = rating {
                        viewer.select_rating(rating)?;
                    }
                    if let Some(notes) = notes {
                        viewer.set_notes(notes)?;
                    }
                    if submit {
                        viewer.submit_feedback()?;
                    }
                    print!("{}", render_viewer(&viewer));
                }
                ModelAction::NoModelLinked => {
                    println!("{}", "No 3D model linked to this job.".yellow());
                }
                ModelAction::Unavailable => {
                    println!("{}", format!("Job {} not found", detail.job_id()).red());
                }
            }
        }

        Commands::Browse => run_browse(repo).await?,
    }

    Ok(())
}

async fn run_browse(repo: JobRepository) -> Result<()> {
    let mut session = BrowseSession::start(repo).await;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    loop {
        print!("{}> ", session.render());
        stdout.flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        if session.handle(&line).await == Step::Quit {
            break;
        }
        println!();
    }

    Ok(())
}
