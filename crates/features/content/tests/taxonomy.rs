use folio_content::{ContentError, Post, Taxonomy, count_terms, load_posts, similar_posts};
use proptest::prelude::*;
use std::io::Write;

const POSTS: &str = r#"[
    {"slug": "fed-minutes", "title": "Fed minutes", "tags": ["rates", "Fed"], "categories": ["Macro"]},
    {"slug": "yield-curve", "title": "Yield curve", "tags": ["Rates", "bonds"], "categories": ["macro"]},
    {"slug": "etf-flows", "title": "ETF flows", "tags": ["etf"], "categories": ["Markets"]},
    {"slug": "wip", "title": "Unfinished", "tags": ["rates"], "categories": ["Macro"], "draft": true}
]"#;

fn write_posts(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn loads_posts_and_counts_categories() {
    let file = write_posts(POSTS);
    let posts = load_posts(file.path()).unwrap();
    assert_eq!(posts.len(), 4);

    let categories = count_terms(&posts, Taxonomy::Categories);
    assert_eq!(categories[0].name, "Macro");
    assert_eq!(categories[0].count, 2);
    assert_eq!(categories[1].name, "Markets");
    assert_eq!(categories[1].count, 1);
}

#[test]
fn related_posts_from_file() {
    let file = write_posts(POSTS);
    let posts = load_posts(file.path()).unwrap();
    let related: Vec<&str> =
        similar_posts(&posts, "fed-minutes", 3).iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(related, vec!["yield-curve"]);
}

#[test]
fn malformed_file_is_a_json_error() {
    let file = write_posts("{\"slug\": 1}");
    assert!(matches!(load_posts(file.path()), Err(ContentError::Json { .. })));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_posts("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
    assert!(err.to_string().contains("Reading posts"));
}

fn arb_post() -> impl Strategy<Value = Post> {
    (
        "[a-z]{1,8}",
        prop::collection::vec("[a-cA-C]{1,2}", 0..4),
        prop::collection::vec("[x-z]{1}", 0..2),
        any::<bool>(),
    )
        .prop_map(|(slug, tags, categories, draft)| Post {
            slug,
            title: String::new(),
            tags,
            categories,
            draft,
        })
}

proptest! {
    #[test]
    fn counts_are_sorted_and_bounded(posts in prop::collection::vec(arb_post(), 0..12)) {
        let published = posts.iter().filter(|p| !p.draft).count();
        let counts = count_terms(&posts, Taxonomy::Tags);
        for pair in counts.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        for term in &counts {
            prop_assert!(term.count >= 1 && term.count <= published);
        }
    }

    #[test]
    fn similar_never_returns_self_or_drafts(posts in prop::collection::vec(arb_post(), 1..12), limit in 0usize..5) {
        let slug = posts[0].slug.clone();
        let related = similar_posts(&posts, &slug, limit);
        prop_assert!(related.len() <= limit);
        for post in related {
            prop_assert!(post.slug != slug);
            prop_assert!(!post.draft);
        }
    }
}
