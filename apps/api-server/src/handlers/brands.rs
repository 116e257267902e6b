//! Brand directory endpoints.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use sockpress_core::domain::{Brand, BrandDraft, Draft};
use sockpress_core::services::catalog;
use sockpress_core::{DomainError, RepoError};
use sockpress_shared::ApiResponse;
use sockpress_shared::dto::{BrandPayload, CategoryQuery};

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

pub(crate) fn brand_draft(payload: BrandPayload) -> BrandDraft {
    BrandDraft {
        name: payload.name,
        logo: payload.logo,
        cover_image: payload.cover_image,
        description: payload.description,
        website: payload.website,
        tags: payload.tags,
        countries: payload.countries,
        price_tiers: payload.price_tiers,
        founded: payload.founded,
        headquarters: payload.headquarters,
    }
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "Brand",
        id,
    }
}

/// GET /api/brands[?category=]
pub async fn list_brands(
    state: web::Data<AppState>,
    query: web::Query<CategoryQuery>,
) -> AppResult<HttpResponse> {
    let brands = state.brands.find_all().await?;
    let category = query.category.as_deref().unwrap_or(catalog::ALL_BRANDS);

    let matching: Vec<Brand> = catalog::brands_by_category(&brands, category)
        .into_iter()
        .cloned()
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(matching)))
}

/// GET /api/brands/{id}
pub async fn get_brand(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let brand = state
        .brands
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(brand)))
}

/// GET /api/brands/{id}/articles
pub async fn brand_articles(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let articles = state.articles.find_by_brand(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(articles)))
}

/// POST /api/admin/brands
pub async fn create_brand(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<BrandPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    let rating = payload.rating;
    let draft = brand_draft(payload);
    draft.validate()?;

    let mut brand = Brand::new(draft);
    if let Some(rating) = rating {
        brand.rating = rating;
    }
    let brand = state.brands.save(brand).await?;

    tracing::info!(brand_id = %brand.id, admin_id = %admin.0.user_id, "Brand created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(brand)))
}

/// PUT /api/admin/brands/{id}
pub async fn update_brand(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<BrandPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let payload = body.into_inner();
    let rating = payload.rating;
    let draft = brand_draft(payload);
    draft.validate()?;

    let mut brand = state
        .brands
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    brand.apply(draft);
    if let Some(rating) = rating {
        brand.rating = rating;
    }
    let brand = state.brands.save(brand).await?;

    tracing::info!(brand_id = %id, admin_id = %admin.0.user_id, "Brand updated");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(brand)))
}

/// DELETE /api/admin/brands/{id}
pub async fn delete_brand(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.brands.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    })?;

    tracing::info!(brand_id = %id, admin_id = %admin.0.user_id, "Brand deleted");
    Ok(HttpResponse::NoContent().finish())
}
