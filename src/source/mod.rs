//! Post source abstraction layer.
//!
//! This module defines the [`PostSource`] trait and the common
//! [`PostRecord`] type.  Concrete sources live in sub-modules (currently only
//! [`reddit`]).
//!
//! ## For contributors — adding a new source
//!
//! 1. Create a new file in this directory (e.g. `lemmy.rs`).
//! 2. Define a struct holding its configuration and implement [`PostSource`].
//! 3. Add `mod lemmy;` below and re-export the struct.
//! 4. Construct it in `main.rs` and hand it to the
//!    [`Pipeline`](crate::pipeline::Pipeline).
//!
//! Filtering, selection and rendering never look at where a post came from.

mod post;
mod reddit;

pub use post::PostRecord;
pub use reddit::RedditSource;

#[cfg(test)]
pub(crate) use post::tests::make_post;

use crate::error::FetchError;

/// Trait that every post source must implement.
///
/// The pipeline calls [`fetch()`](PostSource::fetch) exactly once per run.
pub trait PostSource {
    /// Human-readable label used in log lines.
    fn name(&self) -> &str;

    /// Fetch one batch of posts.
    ///
    /// An empty listing is `Ok(vec![])`, not an error, so that callers can
    /// tell "nothing there" apart from "could not ask".
    async fn fetch(&self) -> Result<Vec<PostRecord>, FetchError>;
}
