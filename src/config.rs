//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

pub const DEFAULT_URL: &str = "https://www.reddit.com/r/CybersecurityMemes/top/.json";

/// Render the top image post of a listing into a README template.
#[derive(Parser, Debug, Clone)]
#[command(name = "top-post-readme", version, about, long_about = None)]
pub struct Config {
    /// Listing endpoint returning `{ data: { children: [ { data: post } ] } }`
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Template containing `{templ_title}` and `{templ_image}`
    #[arg(long, default_value = "README.template.md")]
    pub template: PathBuf,

    /// Output document, overwritten on every successful run
    #[arg(long, default_value = "README.md")]
    pub output: PathBuf,

    /// Directory that relative template and output paths resolve against
    #[arg(long, default_value = ".")]
    pub workdir: PathBuf,

    /// Request timeout in seconds; 0 disables it
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// User-Agent header sent with the listing request
    #[arg(long, default_value = concat!("top-post-readme/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// How failures map to the process exit status
    #[arg(long, value_enum, default_value_t = ExitPolicy::Lenient)]
    pub exit_policy: ExitPolicy,
}

/// Exit status behaviour.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Always exit 0; failures are only logged.
    Lenient,
    /// Exit 1 when fetching or rendering failed.  Empty results still exit 0.
    Strict,
}

impl ExitPolicy {
    /// Process exit status for a run that did (`failed`) or did not fail.
    pub fn exit_status(self, failed: bool) -> u8 {
        match self {
            ExitPolicy::Strict if failed => 1,
            _ => 0,
        }
    }
}

impl Config {
    pub fn template_path(&self) -> PathBuf {
        self.workdir.join(&self.template)
    }

    pub fn output_path(&self) -> PathBuf {
        self.workdir.join(&self.output)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
