use anyhow::Result;
use folio::content::{Taxonomy, count_terms, load_posts, similar_posts};
use std::io::Write;
use std::path::Path;

/// Prints term counts for one taxonomy.
///
/// # Errors
/// Returns an error if the posts cannot be loaded or `out` cannot be written.
pub fn terms(out: &mut impl Write, posts: &Path, taxonomy: Taxonomy, json: bool) -> Result<()> {
    let posts = load_posts(posts)?;
    let counts = count_terms(&posts, taxonomy);

    if json {
        serde_json::to_writer_pretty(&mut *out, &counts)?;
        writeln!(out)?;
    } else {
        for term in &counts {
            writeln!(out, "{:>4}  {}", term.count, term.name)?;
        }
    }
    Ok(())
}

/// Prints up to `limit` posts related to `slug`, best first.
///
/// # Errors
/// Returns an error if the posts cannot be loaded or `out` cannot be written.
pub fn similar(out: &mut impl Write, posts: &Path, slug: &str, limit: usize) -> Result<()> {
    let posts = load_posts(posts)?;
    for post in similar_posts(&posts, slug, limit) {
        writeln!(out, "{}  {}", post.slug, post.title)?;
    }
    Ok(())
}
