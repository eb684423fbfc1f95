//! # Content
//!
//! Taxonomy helpers for the site's posts: how often each tag or category is used, and
//! which posts are related to a given one. Draft posts never show up in either.

mod error;
mod similar;
mod terms;

pub use crate::error::{ContentError, ContentErrorExt};
pub use crate::similar::similar_posts;
pub use crate::terms::count_terms;
pub use folio_domain::content::{Post, Taxonomy, TermCount};

use std::path::Path;
use tracing::info;

/// Reads a JSON array of posts.
///
/// # Errors
/// Returns [`ContentError::Io`] if the file cannot be read, or [`ContentError::Json`] if it
/// is not a list of posts.
pub fn load_posts(path: impl AsRef<Path>) -> Result<Vec<Post>, ContentError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .context(format!("Reading posts from {}", path.display()))?;
    let posts = serde_json::from_str::<Vec<Post>>(&json).context("Parsing posts")?;
    info!(path = %path.display(), posts = posts.len(), "Loaded posts");
    Ok(posts)
}
