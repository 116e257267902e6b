use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use sockpress_core::ports::TokenService;
use sockpress_infra::{InMemoryDeviceStorage, JwtConfig, JwtTokenService};

use super::configure_routes;
use crate::state::AppState;

fn token_service() -> Arc<dyn TokenService> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret: "handler-test-secret".to_string(),
        issuer: Some("sockpress-test".to_string()),
        ..JwtConfig::default()
    }))
}

fn bearer(tokens: &Arc<dyn TokenService>, roles: &[&str]) -> (Uuid, String) {
    let user_id = Uuid::new_v4();
    let token = tokens
        .generate_token(
            user_id,
            "someone@socks.io",
            roles.iter().map(|r| r.to_string()).collect(),
        )
        .unwrap();
    (user_id, format!("Bearer {token}"))
}

fn fresh_state() -> AppState {
    AppState::in_memory(Arc::new(InMemoryDeviceStorage::new()))
}

macro_rules! test_app {
    ($state:expr, $tokens:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .app_data(web::Data::new($tokens.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_health_reports_backend() {
    let app = test_app!(fresh_state(), token_service());

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
}

#[actix_rt::test]
async fn test_submission_requires_authentication() {
    let app = test_app!(fresh_state(), token_service());

    let req = test::TestRequest::post()
        .uri("/api/submissions")
        .set_json(json!({"title": "T", "category": "News"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_moderation_requires_admin_role() {
    let tokens = token_service();
    let app = test_app!(fresh_state(), tokens);
    let (_, reader) = bearer(&tokens, &["authenticated"]);

    let req = test::TestRequest::post()
        .uri(&format!("/api/admin/submissions/{}/approve", Uuid::new_v4()))
        .insert_header((header::AUTHORIZATION, reader))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn test_submit_approve_publishes_article() {
    let tokens = token_service();
    let app = test_app!(fresh_state(), tokens);
    let (author_id, author) = bearer(&tokens, &["authenticated"]);
    let (_, admin) = bearer(&tokens, &["admin"]);

    let req = test::TestRequest::post()
        .uri("/api/submissions")
        .insert_header((header::AUTHORIZATION, author.clone()))
        .set_json(json!({"title": "T", "category": "News", "excerpt": "E"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let submission_id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["status"], "pending");
    assert_eq!(created["data"]["author_id"], author_id.to_string());

    let req = test::TestRequest::get()
        .uri("/api/admin/submissions")
        .insert_header((header::AUTHORIZATION, admin.clone()))
        .to_request();
    let queue: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(queue["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::post()
        .uri(&format!("/api/admin/submissions/{submission_id}/approve"))
        .insert_header((header::AUTHORIZATION, admin.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let approval: Value = test::read_body_json(resp).await;
    let published = &approval["data"]["published"];
    let submission = &approval["data"]["submission"];
    assert_eq!(published["title"], "T");
    assert_eq!(published["category"], "News");
    assert_eq!(submission["status"], "approved");
    assert_eq!(submission["published_entity_id"], published["id"]);

    let article_id = published["id"].as_str().unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/api/articles/{article_id}"))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(detail["data"]["title"], "T");
    assert!(detail["data"]["brands"].as_array().unwrap().is_empty());

    // Terminal: a second approval is a conflict.
    let req = test::TestRequest::post()
        .uri(&format!("/api/admin/submissions/{submission_id}/approve"))
        .insert_header((header::AUTHORIZATION, admin.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get()
        .uri("/api/admin/submissions")
        .insert_header((header::AUTHORIZATION, admin))
        .to_request();
    let queue: Value = test::call_and_read_body_json(&app, req).await;
    assert!(queue["data"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri("/api/submissions/mine")
        .insert_header((header::AUTHORIZATION, author))
        .to_request();
    let mine: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(mine["data"][0]["status"], "approved");
}

#[actix_rt::test]
async fn test_decline_requires_comment() {
    let tokens = token_service();
    let app = test_app!(fresh_state(), tokens);
    let (_, author) = bearer(&tokens, &[]);
    let (_, admin) = bearer(&tokens, &["admin"]);

    let req = test::TestRequest::post()
        .uri("/api/brand-submissions")
        .insert_header((header::AUTHORIZATION, author))
        .set_json(json!({"name": "Darn Tough", "tags": ["hiking"]}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/admin/brand-submissions/{id}/decline"))
        .insert_header((header::AUTHORIZATION, admin.clone()))
        .set_json(json!({"comment": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri(&format!("/api/admin/brand-submissions/{id}/decline"))
        .insert_header((header::AUTHORIZATION, admin.clone()))
        .set_json(json!({"comment": "needs sources"}))
        .to_request();
    let declined: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(declined["data"]["status"], "declined");
    assert_eq!(declined["data"]["moderation_comment"], "needs sources");

    let req = test::TestRequest::get()
        .uri("/api/admin/brand-submissions?status=declined")
        .insert_header((header::AUTHORIZATION, admin))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_unknown_category_is_rejected() {
    let tokens = token_service();
    let app = test_app!(fresh_state(), tokens);
    let (_, author) = bearer(&tokens, &[]);

    let req = test::TestRequest::post()
        .uri("/api/submissions")
        .insert_header((header::AUTHORIZATION, author))
        .set_json(json!({"title": "T", "category": "Gossip"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(problem["status"], 400);
}

#[actix_rt::test]
async fn test_missing_article_is_not_found() {
    let app = test_app!(fresh_state(), token_service());

    let req = test::TestRequest::get()
        .uri(&format!("/api/articles/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_brand_category_filter_and_search() {
    let tokens = token_service();
    let app = test_app!(fresh_state(), tokens);
    let (_, admin) = bearer(&tokens, &["admin"]);

    for (name, tag) in [("Stance", "Athletic"), ("Happy Socks", "Fashion")] {
        let req = test::TestRequest::post()
            .uri("/api/admin/brands")
            .insert_header((header::AUTHORIZATION, admin.clone()))
            .set_json(json!({"name": name, "tags": [tag], "description": "Socks"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/brands?category=athletic")
        .to_request();
    let athletic: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(athletic["data"].as_array().unwrap().len(), 1);
    assert_eq!(athletic["data"][0]["name"], "Stance");

    let req = test::TestRequest::get().uri("/api/brands").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/search?q=happy")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found["data"]["brands"].as_array().unwrap().len(), 1);
    assert!(found["data"]["articles"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_admin_article_lifecycle() {
    let tokens = token_service();
    let app = test_app!(fresh_state(), tokens);
    let (_, admin) = bearer(&tokens, &["admin"]);

    let req = test::TestRequest::post()
        .uri("/api/admin/articles")
        .insert_header((header::AUTHORIZATION, admin.clone()))
        .set_json(json!({"title": "Drop day", "category": "Drops", "featured": true}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/articles/featured")
        .to_request();
    let featured: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(featured["data"][0]["id"], id.as_str());

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/articles/{id}"))
        .insert_header((header::AUTHORIZATION, admin.clone()))
        .set_json(json!({"title": "Drop day, revised", "category": "Drops"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["title"], "Drop day, revised");
    assert_eq!(updated["data"]["featured"], true);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/articles/{id}"))
        .insert_header((header::AUTHORIZATION, admin.clone()))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/articles/{id}"))
        .insert_header((header::AUTHORIZATION, admin))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_rt::test]
async fn test_newsletter_subscribe_normalizes_and_rejects_duplicates() {
    let app = test_app!(fresh_state(), token_service());

    let req = test::TestRequest::post()
        .uri("/api/newsletter/subscribe")
        .set_json(json!({"email": "USER@Example.com "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "user@example.com");
    assert_eq!(body["data"]["subscriber_count"], 1);

    let req = test::TestRequest::post()
        .uri("/api/newsletter/subscribe")
        .set_json(json!({"email": "user@example.com"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );

    let req = test::TestRequest::post()
        .uri("/api/newsletter/unsubscribe")
        .set_json(json!({"email": "nobody@example.com"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri("/api/newsletter/subscribe")
        .set_json(json!({"email": "not-an-email"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}
