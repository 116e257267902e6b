//! Submission endpoints, shared by article and brand submissions.
//!
//! Authors file and list their own submissions; admins work the moderation
//! queue.

use std::str::FromStr;

use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use sockpress_core::DomainError;
use sockpress_core::domain::{ArticleSubmission, BrandSubmission, Reviewable, SubmissionStatus};
use sockpress_core::services::ModerationService;
use sockpress_shared::ApiResponse;
use sockpress_shared::dto::{
    ApprovalResponse, ArticlePayload, BrandPayload, ModerationCommentRequest, StatusQuery,
};

use super::{articles, brands};
use crate::middleware::auth::{AdminIdentity, Identity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// A submission type exposed over HTTP.
pub trait Moderated: Reviewable<Published: Serialize> + Serialize {
    type Payload: DeserializeOwned + 'static;

    fn service(state: &AppState) -> &ModerationService<Self>;

    fn draft(payload: Self::Payload) -> AppResult<Self::Draft>;
}

impl Moderated for ArticleSubmission {
    type Payload = ArticlePayload;

    fn service(state: &AppState) -> &ModerationService<Self> {
        &state.article_moderation
    }

    fn draft(payload: ArticlePayload) -> AppResult<Self::Draft> {
        articles::article_draft(payload)
    }
}

impl Moderated for BrandSubmission {
    type Payload = BrandPayload;

    fn service(state: &AppState) -> &ModerationService<Self> {
        &state.brand_moderation
    }

    fn draft(payload: BrandPayload) -> AppResult<Self::Draft> {
        Ok(brands::brand_draft(payload))
    }
}

/// POST /api/submissions, POST /api/brand-submissions
pub async fn submit<S: Moderated>(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<S::Payload>,
) -> AppResult<HttpResponse> {
    let draft = S::draft(body.into_inner())?;
    let submission = S::service(&state).submit(identity.user_id, draft).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(submission)))
}

/// GET /api/submissions/mine
pub async fn mine<S: Moderated>(
    identity: Identity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let submissions = S::service(&state).by_author(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(submissions)))
}

/// GET /api/admin/submissions[?status=]
///
/// Without a status filter this is the pending queue.
pub async fn list<S: Moderated>(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    query: web::Query<StatusQuery>,
) -> AppResult<HttpResponse> {
    let status = query
        .status
        .as_deref()
        .map(SubmissionStatus::from_str)
        .transpose()?
        .unwrap_or(SubmissionStatus::Pending);

    let submissions = S::service(&state).by_status(status).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(submissions)))
}

/// GET /api/admin/submissions/{id}
pub async fn get<S: Moderated>(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let submission = S::service(&state)
        .get(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: S::KIND,
            id,
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(submission)))
}

/// PUT /api/admin/submissions/{id}
pub async fn revise<S: Moderated>(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<S::Payload>,
) -> AppResult<HttpResponse> {
    let draft = S::draft(body.into_inner())?;
    let submission = S::service(&state).revise(path.into_inner(), draft).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(submission)))
}

/// POST /api/admin/submissions/{id}/approve
pub async fn approve<S: Moderated>(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let approval = S::service(&state).approve(id).await?;

    tracing::debug!(kind = S::KIND, submission_id = %id, admin_id = %admin.0.user_id, "Approval completed");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(ApprovalResponse {
        submission: approval.submission,
        published: approval.published,
    })))
}

/// POST /api/admin/submissions/{id}/decline
pub async fn decline<S: Moderated>(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ModerationCommentRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let submission = S::service(&state).decline(id, &body.comment).await?;

    tracing::debug!(kind = S::KIND, submission_id = %id, admin_id = %admin.0.user_id, "Decline completed");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(submission)))
}

/// PUT /api/admin/submissions/{id}/comment
pub async fn update_comment<S: Moderated>(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ModerationCommentRequest>,
) -> AppResult<HttpResponse> {
    let submission = S::service(&state)
        .update_moderation_comment(path.into_inner(), &body.comment)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(submission)))
}
