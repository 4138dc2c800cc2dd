//! Logging setup
//!
//! Logs go to stderr so screen output on stdout stays clean.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `fieldsync=warn`)
//! - `FIELDSYNC_LOG_FORMAT`: `json` for structured output, anything else for pretty

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FORMAT_ENV: &str = "FIELDSYNC_LOG_FORMAT";

pub fn init_logging(verbose: bool) -> Result<()> {
    let default_directive = if verbose {
        "fieldsync=debug"
    } else {
        "fieldsync=warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .context("Failed to create env filter")?;

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }

    Ok(())
}
