//! Error types for the pipeline stages.
//!
//! Each stage that can fail has its own error enum.  None of them cross a
//! stage boundary: the driver in [`crate::pipeline`] logs them and turns them
//! into an [`Outcome`](crate::pipeline::Outcome).

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;

/// Failure while fetching or decoding the post listing.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure: DNS, connect, timeout, or reading the body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    /// The body was not JSON of the expected listing shape.
    #[error("malformed listing: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while producing the output document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot read template {}: {source}", path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
