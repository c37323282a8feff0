//! Reddit listing source.
//!
//! Fetches a listing endpoint such as
//! `https://www.reddit.com/r/<sub>/top/.json` and extracts the posts from its
//! JSON envelope:
//!
//! ```text
//! { "data": { "children": [ { "data": { "title": …, "url": …, "score": … } }, … ] } }
//! ```
//!
//! Missing `data` or `children` nodes are treated as an empty listing rather
//! than a parse failure, and a child that does not decode as a post is
//! dropped.  Only a body that is not JSON, or whose envelope has the wrong
//! shape, is an error.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{PostRecord, PostSource};
use crate::error::FetchError;

/// A Reddit-style listing endpoint.
pub struct RedditSource {
    /// Full listing URL, including the `.json` suffix.
    pub url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    data: Option<ListingData>,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Option<Vec<Value>>,
}

impl RedditSource {
    /// Create a source for `url`.
    ///
    /// `timeout` bounds the whole request, body included; `None` waits
    /// forever.  Reddit rejects requests without a `User-Agent`, so one is
    /// always sent.
    pub fn new(
        url: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            url: url.into(),
            client: builder.build()?,
        })
    }

    /// Decode a listing body into posts.
    ///
    /// Pure function (no I/O) so tests can exercise the envelope handling
    /// without a server.  Children are decoded one at a time: a child that
    /// does not decode as a post is skipped, not fatal.
    pub fn parse_listing(body: &[u8]) -> Result<Vec<PostRecord>, FetchError> {
        let listing: Listing = serde_json::from_slice(body)?;
        let posts = listing
            .data
            .and_then(|data| data.children)
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::decode_child)
            .collect();
        Ok(posts)
    }

    fn decode_child(mut child: Value) -> Option<PostRecord> {
        let data = child.get_mut("data").map(Value::take)?;
        if data.is_null() {
            return None;
        }
        match serde_json::from_value(data) {
            Ok(post) => Some(post),
            Err(e) => {
                debug!("skipping undecodable post: {e}");
                None
            }
        }
    }
}

impl PostSource for RedditSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<PostRecord>, FetchError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "listing body received");
        Self::parse_listing(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
