//! HTTP handlers and route configuration.

mod articles;
mod brands;
mod health;
mod newsletter;
mod search;
mod submissions;

#[cfg(test)]
mod tests;

use actix_web::{Scope, web};

use sockpress_core::domain::{ArticleSubmission, BrandSubmission};

use crate::middleware::error::AppError;
use submissions::Moderated;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .route("/search", web::get().to(search::search))
                .service(
                    web::scope("/articles")
                        .route("", web::get().to(articles::list_articles))
                        .route("/featured", web::get().to(articles::featured_articles))
                        .route("/{id}", web::get().to(articles::get_article)),
                )
                .service(
                    web::scope("/brands")
                        .route("", web::get().to(brands::list_brands))
                        .route("/{id}", web::get().to(brands::get_brand))
                        .route("/{id}/articles", web::get().to(brands::brand_articles)),
                )
                .service(
                    web::scope("/newsletter")
                        .route("/subscribe", web::post().to(newsletter::subscribe))
                        .route("/unsubscribe", web::post().to(newsletter::unsubscribe)),
                )
                // Authenticated routes
                .service(authoring_scope::<ArticleSubmission>("/submissions"))
                .service(authoring_scope::<BrandSubmission>("/brand-submissions"))
                // Admin routes
                .service(
                    web::scope("/admin")
                        .service(
                            web::scope("/articles")
                                .route("", web::post().to(articles::create_article))
                                .route("/{id}", web::put().to(articles::update_article))
                                .route("/{id}", web::delete().to(articles::delete_article)),
                        )
                        .service(
                            web::scope("/brands")
                                .route("", web::post().to(brands::create_brand))
                                .route("/{id}", web::put().to(brands::update_brand))
                                .route("/{id}", web::delete().to(brands::delete_brand)),
                        )
                        .service(moderation_scope::<ArticleSubmission>("/submissions"))
                        .service(moderation_scope::<BrandSubmission>("/brand-submissions")),
                ),
        );
}

fn authoring_scope<S: Moderated>(path: &str) -> Scope {
    web::scope(path)
        .route("", web::post().to(submissions::submit::<S>))
        .route("/mine", web::get().to(submissions::mine::<S>))
}

fn moderation_scope<S: Moderated>(path: &str) -> Scope {
    web::scope(path)
        .route("", web::get().to(submissions::list::<S>))
        .route("/{id}", web::get().to(submissions::get::<S>))
        .route("/{id}", web::put().to(submissions::revise::<S>))
        .route("/{id}/approve", web::post().to(submissions::approve::<S>))
        .route("/{id}/decline", web::post().to(submissions::decline::<S>))
        .route("/{id}/comment", web::put().to(submissions::update_comment::<S>))
}

/// Malformed JSON bodies become problem documents instead of plain text.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
