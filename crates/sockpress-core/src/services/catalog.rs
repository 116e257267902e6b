//! Pure filtering and search over article and brand collections.

use serde::Serialize;

use crate::domain::{Article, Brand, Category};

/// Pseudo-category that matches every brand.
pub const ALL_BRANDS: &str = "all";

/// Brands tagged with `category`, or every brand for `"all"`.
pub fn brands_by_category<'a>(brands: &'a [Brand], category: &str) -> Vec<&'a Brand> {
    if category.trim().eq_ignore_ascii_case(ALL_BRANDS) {
        return brands.iter().collect();
    }
    brands.iter().filter(|b| b.has_tag(category)).collect()
}

pub fn articles_by_category(articles: &[Article], category: Category) -> Vec<&Article> {
    articles.iter().filter(|a| a.category == category).collect()
}

/// Newest first, at most `limit`.
pub fn latest_articles(articles: &[Article], limit: usize) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    sorted.truncate(limit);
    sorted
}

/// Other articles in the same category, newest first.
pub fn related_articles<'a>(
    article: &Article,
    pool: &'a [Article],
    limit: usize,
) -> Vec<&'a Article> {
    let mut related: Vec<&Article> = pool
        .iter()
        .filter(|a| a.id != article.id && a.category == article.category)
        .collect();
    related.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    related.truncate(limit);
    related
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub articles: Vec<Article>,
    pub brands: Vec<Brand>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty() && self.brands.is_empty()
    }
}

/// Case-insensitive substring search. A blank query matches nothing.
pub fn search(query: &str, articles: &[Article], brands: &[Brand]) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    SearchResults {
        articles: articles
            .iter()
            .filter(|a| {
                hit(&a.title) || hit(&a.excerpt) || a.content.as_deref().is_some_and(hit)
            })
            .cloned()
            .collect(),
        brands: brands
            .iter()
            .filter(|b| hit(&b.name) || hit(&b.description) || b.tags.iter().any(|t| hit(t)))
            .cloned()
            .collect(),
    }
}
