use folio_domain::content::{Post, Taxonomy, TermCount};
use fxhash::{FxHashMap, FxHashSet};

/// Comparison key of a term: trimmed, lower-cased.
pub(crate) fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Distinct normalised terms of `post`, blanks dropped.
pub(crate) fn term_set(post: &Post, taxonomy: Taxonomy) -> FxHashSet<String> {
    taxonomy.terms(post).iter().map(|t| normalize(t)).filter(|t| !t.is_empty()).collect()
}

/// Number of published posts per term.
///
/// Terms match case-insensitively; the first spelling seen is the one reported. A post
/// listing the same term twice counts once. Sorted by count, then case-insensitive name.
#[must_use]
pub fn count_terms(posts: &[Post], taxonomy: Taxonomy) -> Vec<TermCount> {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut counts: Vec<TermCount> = Vec::new();

    for post in posts.iter().filter(|p| !p.draft) {
        let mut seen = FxHashSet::default();
        for raw in taxonomy.terms(post) {
            let key = normalize(raw);
            if key.is_empty() || !seen.insert(key.clone()) {
                continue;
            }
            let slot = *index.entry(key).or_insert_with(|| {
                counts.push(TermCount { name: raw.trim().to_owned(), count: 0 });
                counts.len() - 1
            });
            counts[slot].count += 1;
        }
    }

    counts.sort_by_cached_key(|t| (std::cmp::Reverse(t.count), normalize(&t.name)));
    counts
}
