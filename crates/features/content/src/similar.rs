use crate::terms::term_set;
use folio_domain::content::{Post, Taxonomy};
use tracing::debug;

const TAG_WEIGHT: usize = 2;
const CATEGORY_WEIGHT: usize = 1;

/// Posts most related to `slug`, best first.
///
/// Score is shared tags x2 plus shared categories, case-insensitive. The post itself,
/// drafts and unrelated posts are skipped; equal scores keep input order.
#[must_use]
pub fn similar_posts<'a>(posts: &'a [Post], slug: &str, limit: usize) -> Vec<&'a Post> {
    let Some(target) = posts.iter().find(|p| p.slug == slug) else {
        debug!(slug, "Unknown post slug");
        return Vec::new();
    };

    let tags = term_set(target, Taxonomy::Tags);
    let categories = term_set(target, Taxonomy::Categories);

    let mut scored: Vec<(usize, &Post)> = posts
        .iter()
        .filter(|p| !p.draft && p.slug != target.slug)
        .map(|p| {
            let shared_tags = term_set(p, Taxonomy::Tags).intersection(&tags).count();
            let shared_categories =
                term_set(p, Taxonomy::Categories).intersection(&categories).count();
            (shared_tags * TAG_WEIGHT + shared_categories * CATEGORY_WEIGHT, p)
        })
        .filter(|(score, _)| *score > 0)
        .collect();

    // Stable: ties keep input order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, tags: &[&str], categories: &[&str]) -> Post {
        Post {
            slug: slug.into(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            categories: categories.iter().map(|c| (*c).to_owned()).collect(),
            ..Post::default()
        }
    }

    fn slugs(posts: Vec<&Post>) -> Vec<&str> {
        posts.into_iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn tags_weigh_more_than_categories() {
        let posts = [
            post("target", &["rates", "bonds"], &["macro"]),
            post("same-category", &[], &["Macro"]),
            post("one-tag", &["RATES"], &[]),
            post("unrelated", &["crypto"], &["markets"]),
        ];
        assert_eq!(slugs(similar_posts(&posts, "target", 10)), vec!["one-tag", "same-category"]);
    }

    #[test]
    fn ties_keep_input_order_and_limit_applies() {
        let posts = [
            post("target", &["etf"], &[]),
            post("first", &["etf"], &[]),
            post("second", &["etf"], &[]),
            post("third", &["etf"], &[]),
        ];
        assert_eq!(slugs(similar_posts(&posts, "target", 2)), vec!["first", "second"]);
    }

    #[test]
    fn drafts_and_unknown_slugs() {
        let mut draft = post("draft", &["etf"], &[]);
        draft.draft = true;
        let posts = [post("target", &["etf"], &[]), draft];
        assert!(similar_posts(&posts, "target", 5).is_empty());
        assert!(similar_posts(&posts, "missing", 5).is_empty());
    }
}
