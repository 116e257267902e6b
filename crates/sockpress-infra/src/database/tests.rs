use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use serde_json::json;
use uuid::Uuid;

use sockpress_core::RepoError;
use sockpress_core::domain::{
    Article, ArticleSubmission, Brand, BrandSubmission, Category, SubmissionStatus,
};
use sockpress_core::ports::{ArticleRepository, BaseRepository, SubmissionRepository};

use crate::database::entity::{article, brand, brand_submission, submission};
use crate::database::postgres_repo::{
    PostgresArticleRepository, PostgresBrandRepository, PostgresBrandSubmissionRepository,
    PostgresSubmissionRepository,
};

fn article_row(id: Uuid, category: &str) -> article::Model {
    article::Model {
        id,
        title: "Test Article".to_owned(),
        excerpt: "Excerpt".to_owned(),
        category: category.to_owned(),
        image: "cover.jpg".to_owned(),
        published_at: Utc::now().into(),
        featured: true,
        content: Some("Body".to_owned()),
        brand_ids: json!([]),
    }
}

fn brand_row(id: Uuid) -> brand::Model {
    brand::Model {
        id,
        name: "Loopwheel".to_owned(),
        logo: "logo.svg".to_owned(),
        cover_image: None,
        description: "Loopwheel knits".to_owned(),
        website: "https://example.com".to_owned(),
        tags: json!(["Luxury"]),
        countries: json!(["Japan"]),
        price_tiers: json!(["$$$"]),
        founded: Some(1999),
        headquarters: "Tokyo".to_owned(),
        rating: 4.5,
    }
}

fn brand_submission_row(status: &str) -> brand_submission::Model {
    let now = Utc::now();
    brand_submission::Model {
        id: Uuid::new_v4(),
        author_id: Uuid::new_v4(),
        name: "Loopwheel".to_owned(),
        logo: "logo.svg".to_owned(),
        cover_image: Some("cover.jpg".to_owned()),
        description: "Loopwheel knits".to_owned(),
        website: "https://example.com".to_owned(),
        tags: json!(["Luxury", "Cotton"]),
        countries: json!(["Japan"]),
        price_tiers: json!([]),
        founded: None,
        headquarters: "Tokyo".to_owned(),
        status: status.to_owned(),
        moderation_comment: None,
        published_entity_id: None,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_article_by_id() {
    let article_id = Uuid::new_v4();
    let brand_id = Uuid::new_v4();
    let mut row = article_row(article_id, "Drops");
    row.brand_ids = json!([brand_id.to_string()]);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);

    let result: Option<Article> = repo.find_by_id(article_id).await.unwrap();

    let article = result.expect("row should be found");
    assert_eq!(article.id, article_id);
    assert_eq!(article.category, Category::Drops);
    assert_eq!(article.brand_ids, vec![brand_id]);
}

#[tokio::test]
async fn test_unknown_category_is_a_decode_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![article_row(Uuid::new_v4(), "Gossip")]])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);
    let result: Result<Vec<Article>, RepoError> = repo.find_all().await;

    assert!(matches!(result, Err(RepoError::Decode(_))));
}

#[tokio::test]
async fn test_backend_error_payload_is_kept() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("relation \"articles\" does not exist".into())])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);
    let err = repo.find_featured().await.unwrap_err();

    match err {
        RepoError::Backend(payload) => assert!(payload.contains("does not exist")),
        other => panic!("expected backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_save_upserts_and_returns_row() {
    let article_id = Uuid::new_v4();
    let row = article_row(article_id, "News");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row.clone()]])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);
    let article = Article::try_from(row).unwrap();
    let saved = repo.save(article.clone()).await.unwrap();
    assert_eq!(saved.id, article.id);

    let log = repo.db.into_transaction_log();
    let sql = format!("{:?}", log);
    assert!(sql.contains("ON CONFLICT"), "upsert expected: {sql}");
}

#[tokio::test]
async fn test_delete_reports_missing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);
    let result = BaseRepository::<Article, Uuid>::delete(&repo, Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_pending_submissions() {
    let now = Utc::now();
    let row = submission::Model {
        id: Uuid::new_v4(),
        author_id: Uuid::new_v4(),
        title: "T".to_owned(),
        excerpt: "E".to_owned(),
        category: "News".to_owned(),
        image: "i.jpg".to_owned(),
        content: None,
        brand_ids: json!([]),
        status: "pending".to_owned(),
        moderation_comment: None,
        published_entity_id: None,
        created_at: now.into(),
        updated_at: now.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresSubmissionRepository::new(db);
    let pending: Vec<ArticleSubmission> =
        repo.find_by_status(SubmissionStatus::Pending).await.unwrap();

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].review.status, SubmissionStatus::Pending);
    assert_eq!(pending[0].draft.title, "T");
}

#[tokio::test]
async fn test_malformed_brand_id_is_a_decode_error() {
    let mut row = article_row(Uuid::new_v4(), "News");
    row.brand_ids = json!(["not-a-uuid"]);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresArticleRepository::new(db);
    let result: Result<Vec<Article>, RepoError> = repo.find_all().await;

    match result {
        Err(RepoError::Decode(detail)) => assert!(detail.starts_with("brand_ids")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_find_brand_decodes_lists() {
    let brand_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![brand_row(brand_id)]])
        .into_connection();

    let repo = PostgresBrandRepository::new(db);
    let brand: Brand = repo.find_by_id(brand_id).await.unwrap().unwrap();

    assert_eq!(brand.tags, vec!["Luxury".to_string()]);
    assert_eq!(brand.countries, vec!["Japan".to_string()]);
    assert_eq!(brand.price_tiers, vec!["$$$".to_string()]);
}

#[tokio::test]
async fn test_brand_tags_object_is_a_decode_error() {
    let mut row = brand_row(Uuid::new_v4());
    row.tags = json!({});
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresBrandRepository::new(db);
    let result: Result<Vec<Brand>, RepoError> = repo.find_all().await;

    assert!(matches!(result, Err(RepoError::Decode(_))));
}

#[tokio::test]
async fn test_find_pending_brand_submissions() {
    let row = brand_submission_row("pending");
    let id = row.id;
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresBrandSubmissionRepository::new(db);
    let pending: Vec<BrandSubmission> =
        repo.find_by_status(SubmissionStatus::Pending).await.unwrap();

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, id);
    assert_eq!(pending[0].review.status, SubmissionStatus::Pending);
    assert_eq!(pending[0].draft.tags, vec!["Luxury", "Cotton"]);
    assert!(pending[0].draft.price_tiers.is_empty());
    assert_eq!(pending[0].draft.cover_image.as_deref(), Some("cover.jpg"));
}

#[tokio::test]
async fn test_brand_submission_tags_object_is_a_decode_error() {
    let mut row = brand_submission_row("pending");
    row.tags = json!({});
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresBrandSubmissionRepository::new(db);
    let result = repo.find_by_status(SubmissionStatus::Pending).await;

    assert!(matches!(result, Err(RepoError::Decode(_))));
}

#[tokio::test]
async fn test_unknown_brand_submission_status_is_a_decode_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![brand_submission_row("archived")]])
        .into_connection();

    let repo = PostgresBrandSubmissionRepository::new(db);
    let result = repo.find_by_author(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::Decode(_))));
}
