//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Article fields sent by admins and submitting authors.
///
/// `category` stays free text here; the server rejects unknown values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlePayload {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub brand_ids: Vec<Uuid>,
    /// Admin only. Ignored on submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// Brand fields sent by admins and submitting authors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandPayload {
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub price_tiers: Vec<String>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default)]
    pub headquarters: String,
    /// Admin only. Ignored on submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Body of decline and comment-edit requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationCommentRequest {
    pub comment: String,
}

/// Result of approving a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalResponse<S, P> {
    pub submission: S,
    pub published: P,
}

/// An article together with the brands it links to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetail<A, B> {
    #[serde(flatten)]
    pub article: A,
    pub brands: Vec<B>,
    pub related: Vec<A>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterResponse {
    pub email: String,
    pub subscribed: bool,
    pub subscriber_count: usize,
}

/// `?category=` filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// `?status=` filter for the moderation queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_payload_defaults() {
        let payload: ArticlePayload =
            serde_json::from_str(r#"{"title":"T","category":"News"}"#).unwrap();

        assert_eq!(payload.title, "T");
        assert!(payload.brand_ids.is_empty());
        assert!(payload.content.is_none());
        assert!(payload.featured.is_none());
    }

    #[test]
    fn test_article_detail_flattens_article() {
        let detail = ArticleDetail {
            article: serde_json::json!({"id": "a1", "title": "T"}),
            brands: vec![serde_json::json!({"name": "Bombas"})],
            related: vec![],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["brands"][0]["name"], "Bombas");
    }
}
