//! One-shot fetch → filter → select → render driver.
//!
//! The run is an explicit state machine:
//!
//! ```text
//! Fetching ──► Filtering ──► Selecting ──► Rendering ──► Done
//!     │            │             │             │
//!     └────────────┴─────────────┴─────────────┴──► Done (early exit)
//! ```
//!
//! Each stage either hands its value forward or jumps straight to `Done`
//! with an [`Outcome`] describing why.  There is no retry and no loop over
//! runs.  Errors never leave [`Pipeline::run`]; they are logged and reported
//! through the outcome.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::error::{FetchError, RenderError};
use crate::render;
use crate::select::{filter_images, select_top};
use crate::source::{PostRecord, PostSource};

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The output document was written for this post.
    Rendered(PostRecord),
    /// The source returned no posts.
    NoPosts,
    /// None of the posts had an image URL.
    NoImagePosts,
    /// Selection produced nothing.
    NoTopPost,
    FetchFailed(FetchError),
    RenderFailed(RenderError),
}

impl Outcome {
    /// `true` for the outcomes caused by an error rather than by an empty
    /// result.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::FetchFailed(_) | Outcome::RenderFailed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Rendered(post) => write!(
                f,
                "rendered \"{}\" (score {})",
                render::display_title(post),
                post.score
            ),
            Outcome::NoPosts => f.write_str("no posts"),
            Outcome::NoImagePosts => f.write_str("no image posts"),
            Outcome::NoTopPost => f.write_str("no top post"),
            Outcome::FetchFailed(e) => write!(f, "fetch failed: {e}"),
            Outcome::RenderFailed(e) => write!(f, "render failed: {e}"),
        }
    }
}

enum State {
    Fetching,
    Filtering(Vec<PostRecord>),
    Selecting(Vec<PostRecord>),
    Rendering(PostRecord),
    Done(Outcome),
}

impl State {
    fn label(&self) -> &'static str {
        match self {
            State::Fetching => "fetching",
            State::Filtering(_) => "filtering",
            State::Selecting(_) => "selecting",
            State::Rendering(_) => "rendering",
            State::Done(_) => "done",
        }
    }
}

/// A configured run: where posts come from and where the document goes.
pub struct Pipeline<S> {
    source: S,
    template_path: PathBuf,
    output_path: PathBuf,
}

impl<S: PostSource> Pipeline<S> {
    pub fn new(
        source: S,
        template_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            template_path: template_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Execute the pipeline once.
    pub async fn run(&self) -> Outcome {
        let mut state = State::Fetching;
        loop {
            debug!(stage = state.label(), "entering stage");
            state = match state {
                State::Fetching => self.fetch().await,
                State::Filtering(posts) => Self::filter(posts),
                State::Selecting(images) => Self::select(images),
                State::Rendering(top) => self.render(top),
                State::Done(outcome) => return outcome,
            };
        }
    }

    async fn fetch(&self) -> State {
        info!("Fetching top posts...");
        match self.source.fetch().await {
            Ok(posts) if posts.is_empty() => {
                warn!("No posts retrieved from {}", self.source.name());
                State::Done(Outcome::NoPosts)
            }
            Ok(posts) => {
                debug!(count = posts.len(), "posts retrieved");
                State::Filtering(posts)
            }
            Err(e) => {
                error!("Error fetching posts from {}: {e}", self.source.name());
                State::Done(Outcome::FetchFailed(e))
            }
        }
    }

    fn filter(posts: Vec<PostRecord>) -> State {
        info!("Filtering posts with images...");
        let images = filter_images(posts);
        if images.is_empty() {
            warn!("No posts with valid images found");
            return State::Done(Outcome::NoImagePosts);
        }
        debug!(count = images.len(), "image posts kept");
        State::Selecting(images)
    }

    fn select(images: Vec<PostRecord>) -> State {
        info!("Finding the top post...");
        let Some(top) = select_top(&images) else {
            warn!("No top post found");
            return State::Done(Outcome::NoTopPost);
        };
        let posted = top
            .created()
            .map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "unknown date".into());
        info!(
            score = top.score,
            "Top post: {} (posted {posted})",
            render::display_title(top)
        );
        State::Rendering(top.clone())
    }

    fn render(&self, top: PostRecord) -> State {
        info!("Generating {}...", self.output_path.display());
        match render::render(&top, &self.template_path, &self.output_path) {
            Ok(()) => {
                info!("{} has been successfully generated!", self.output_path.display());
                State::Done(Outcome::Rendered(top))
            }
            Err(e) => {
                error!("Error generating {}: {e}", self.output_path.display());
                State::Done(Outcome::RenderFailed(e))
            }
        }
    }
}
