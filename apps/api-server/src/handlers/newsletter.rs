//! Newsletter endpoints backed by the server's device-local subscriber list.

use actix_web::{HttpResponse, web};

use sockpress_shared::ApiResponse;
use sockpress_shared::dto::{NewsletterRequest, NewsletterResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/newsletter/subscribe
pub async fn subscribe(
    state: web::Data<AppState>,
    body: web::Json<NewsletterRequest>,
) -> AppResult<HttpResponse> {
    // The store writes one small file synchronously while the lock is held.
    let mut store = state.newsletter.lock().await;
    let email = store.subscribe(&body.email)?;

    let response = NewsletterResponse {
        email: email.to_string(),
        subscribed: true,
        subscriber_count: store.count(),
    };
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        response,
        "Thanks for subscribing!",
    )))
}

/// POST /api/newsletter/unsubscribe
pub async fn unsubscribe(
    state: web::Data<AppState>,
    body: web::Json<NewsletterRequest>,
) -> AppResult<HttpResponse> {
    let mut store = state.newsletter.lock().await;
    let email = store.unsubscribe(&body.email)?;

    let response = NewsletterResponse {
        email: email.to_string(),
        subscribed: false,
        subscriber_count: store.count(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}
