//! Image filtering and top-post selection.
//!
//! Both functions are pure and order-preserving, so their results are
//! reproducible for a given listing.

use crate::source::PostRecord;

/// Keep only the posts whose URL points at an image, preserving order.
///
/// See [`PostRecord::has_image`] for the matching rule.  Posts without a URL
/// are dropped.
pub fn filter_images(posts: Vec<PostRecord>) -> Vec<PostRecord> {
    posts.into_iter().filter(PostRecord::has_image).collect()
}

/// Return the post with the highest score, or `None` for an empty slice.
///
/// Scans left to right and only replaces the running maximum on a strictly
/// greater score, so among equal scores the earliest post wins.
pub fn select_top(posts: &[PostRecord]) -> Option<&PostRecord> {
    let (first, rest) = posts.split_first()?;
    Some(rest.iter().fold(first, |top, current| {
        if current.score > top.score {
            current
        } else {
            top
        }
    }))
}
