use serde::{Deserialize, Serialize};

/// A published (or draft) content page, as far as taxonomy is concerned.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub draft: bool,
}

/// Which term list of a post to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Taxonomy {
    Tags,
    Categories,
}

impl Taxonomy {
    #[must_use]
    pub fn terms(self, post: &Post) -> &[String] {
        match self {
            Self::Tags => &post.tags,
            Self::Categories => &post.categories,
        }
    }
}

/// How many posts carry a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub name: String,
    pub count: usize,
}
