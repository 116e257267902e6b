//! Article endpoints: public reads and admin management.

use std::str::FromStr;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use sockpress_core::domain::{Article, ArticleDraft, Category, Draft};
use sockpress_core::services::catalog;
use sockpress_core::{DomainError, RepoError};
use sockpress_shared::ApiResponse;
use sockpress_shared::dto::{ArticleDetail, ArticlePayload, CategoryQuery};

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

const RELATED_LIMIT: usize = 3;

/// Map the wire payload onto the domain draft. `featured` is not part of it.
pub(crate) fn article_draft(payload: ArticlePayload) -> AppResult<ArticleDraft> {
    Ok(ArticleDraft {
        title: payload.title,
        excerpt: payload.excerpt,
        category: Category::from_str(&payload.category)?,
        image: payload.image,
        content: payload.content,
        brand_ids: payload.brand_ids,
    })
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "Article",
        id,
    }
}

/// GET /api/articles[?category=]
pub async fn list_articles(
    state: web::Data<AppState>,
    query: web::Query<CategoryQuery>,
) -> AppResult<HttpResponse> {
    let articles = match query.category.as_deref() {
        Some(category) => {
            state
                .articles
                .find_by_category(Category::from_str(category)?)
                .await?
        }
        None => state.articles.find_all().await?,
    };

    let newest: Vec<Article> = catalog::latest_articles(&articles, articles.len())
        .into_iter()
        .cloned()
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(newest)))
}

/// GET /api/articles/featured
pub async fn featured_articles(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let articles = state.articles.find_featured().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(articles)))
}

/// GET /api/articles/{id}
pub async fn get_article(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let article = state
        .articles
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let brands = if article.brand_ids.is_empty() {
        Vec::new()
    } else {
        state.brands.find_by_ids(&article.brand_ids).await?
    };

    let pool = state.articles.find_by_category(article.category).await?;
    let related = catalog::related_articles(&article, &pool, RELATED_LIMIT)
        .into_iter()
        .cloned()
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(ArticleDetail {
        article,
        brands,
        related,
    })))
}

/// POST /api/admin/articles
pub async fn create_article(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<ArticlePayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    let featured = payload.featured.unwrap_or(false);
    let draft = article_draft(payload)?;
    draft.validate()?;

    let mut article = Article::new(draft);
    article.featured = featured;
    let article = state.articles.save(article).await?;

    tracing::info!(article_id = %article.id, admin_id = %admin.0.user_id, "Article created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(article)))
}

/// PUT /api/admin/articles/{id}
pub async fn update_article(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ArticlePayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let payload = body.into_inner();
    let featured = payload.featured;
    let draft = article_draft(payload)?;
    draft.validate()?;

    let mut article = state
        .articles
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    article.apply(draft);
    if let Some(featured) = featured {
        article.featured = featured;
    }
    let article = state.articles.save(article).await?;

    tracing::info!(article_id = %id, admin_id = %admin.0.user_id, "Article updated");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(article)))
}

/// DELETE /api/admin/articles/{id}
pub async fn delete_article(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.articles.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    })?;

    tracing::info!(article_id = %id, admin_id = %admin.0.user_id, "Article deleted");
    Ok(HttpResponse::NoContent().finish())
}
