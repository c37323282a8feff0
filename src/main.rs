//! top-post-readme — render the top image post of a listing into a README.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐ Vec<PostRecord> ┌───────────┐  Vec  ┌───────────┐  &Post  ┌───────────┐
//! │ source/   │ ──────────────► │ select    │ ────► │ select    │ ──────► │ render    │
//! │ (fetch)   │                 │ (filter)  │       │ (top)     │         │ (write)   │
//! └───────────┘                 └───────────┘       └───────────┘         └───────────┘
//!        ▲                                                                      │
//!        └────────────────────── pipeline (driver) ─────────────────────────────┘
//! ```
//!
//! * **`source/`** — the `PostSource` trait, the `PostRecord` type and the
//!   Reddit listing implementation.
//! * **`select`** — image filtering and top-score selection.
//! * **`render`** — placeholder substitution and output writing.
//! * **`pipeline`** — the one-shot state machine tying the stages together.
//! * **`config`** — command-line flags.
//! * **`main`** — wires everything together: parse args, set up logging,
//!   and run the pipeline once on a single-threaded runtime.

mod config;
mod error;
mod pipeline;
mod render;
mod select;
mod source;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use config::Config;
use pipeline::Pipeline;
use source::RedditSource;

/// Install the console logger.  `RUST_LOG` overrides the default `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let config = Config::parse();
    init_tracing();

    // -- configure the source ------------------------------------------------
    let source = match RedditSource::new(&config.url, config.timeout(), &config.user_agent) {
        Ok(source) => source,
        Err(e) => {
            error!("Error setting up HTTP client: {e}");
            return Ok(ExitCode::from(config.exit_policy.exit_status(true)));
        }
    };

    // -- run once ------------------------------------------------------------
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building async runtime")?;

    let pipeline = Pipeline::new(source, config.template_path(), config.output_path());
    let outcome = runtime.block_on(pipeline.run());
    debug!("run finished: {outcome}");

    Ok(ExitCode::from(config.exit_policy.exit_status(outcome.is_failure())))
}
