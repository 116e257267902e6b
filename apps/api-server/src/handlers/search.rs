use actix_web::{HttpResponse, web};

use sockpress_core::services::{SearchResults, catalog};
use sockpress_shared::ApiResponse;
use sockpress_shared::dto::SearchQuery;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/search?q=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    if query.q.trim().is_empty() {
        return Ok(HttpResponse::Ok().json(ApiResponse::ok(SearchResults::default())));
    }

    let articles = state.articles.find_all().await?;
    let brands = state.brands.find_all().await?;
    let results = catalog::search(&query.q, &articles, &brands);

    tracing::debug!(
        query = %query.q,
        articles = results.articles.len(),
        brands = results.brands.len(),
        "Search completed"
    );
    Ok(HttpResponse::Ok().json(ApiResponse::ok(results)))
}
