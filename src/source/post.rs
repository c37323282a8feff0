//! The core data type shared across the pipeline.
//!
//! `PostRecord` is one entry from a listing endpoint.  Sources convert their
//! native payload into `PostRecord`s so that filtering, selection and
//! rendering stay source-agnostic.
//!
//! ## For contributors
//!
//! Every field the listing API may omit is either an `Option` or carries a
//! serde default.  A post with a missing field must still deserialize; the
//! later stages decide what "missing" means for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Substrings that mark a post URL as pointing at an image.
///
/// Matching is a raw substring test, so `https://i.example/a.png?width=640`
/// counts as an image while `https://example/A.PNG` does not.
pub const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// A single post, as found under `data.children[].data` in a listing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PostRecord {
    /// Headline.  `None` and `""` render as the literal `Top Post`.
    #[serde(default)]
    pub title: Option<String>,

    /// Link target of the post.  Image posts point straight at the file.
    #[serde(default)]
    pub url: Option<String>,

    /// Popularity score used to pick the winner.  `null` or non-numeric
    /// values count as 0; fractional values are truncated.
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: i64,

    /// Creation time in Unix seconds.  The API reports this as a float.
    #[serde(default)]
    pub created_utc: Option<f64>,
}

fn lenient_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0))
}

impl PostRecord {
    /// `true` if the post has a URL containing one of [`IMAGE_EXTENSIONS`].
    pub fn has_image(&self) -> bool {
        self.url
            .as_deref()
            .is_some_and(|url| IMAGE_EXTENSIONS.iter().any(|ext| url.contains(ext)))
    }

    /// Creation timestamp, if the source supplied a representable one.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        let secs = self.created_utc?;
        if !secs.is_finite() {
            return None;
        }
        DateTime::from_timestamp(secs.trunc() as i64, 0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
