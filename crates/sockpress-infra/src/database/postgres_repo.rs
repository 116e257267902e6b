//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use sockpress_core::RepoError;
use sockpress_core::domain::{
    Article, ArticleSubmission, Brand, BrandSubmission, Category, SubmissionStatus,
};
use sockpress_core::ports::{ArticleRepository, BrandRepository, SubmissionRepository};

use super::entity::article::{self, Entity as ArticleEntity};
use super::entity::brand::{self, Entity as BrandEntity};
use super::entity::brand_submission::{self, Entity as BrandSubmissionEntity};
use super::entity::submission::{self, Entity as SubmissionEntity};
use super::postgres_base::{PostgresBaseRepository, backend_error, decode_rows};

/// PostgreSQL article repository.
pub type PostgresArticleRepository = PostgresBaseRepository<ArticleEntity>;

/// PostgreSQL brand repository.
pub type PostgresBrandRepository = PostgresBaseRepository<BrandEntity>;

/// PostgreSQL article submission repository.
pub type PostgresSubmissionRepository = PostgresBaseRepository<SubmissionEntity>;

/// PostgreSQL brand submission repository.
pub type PostgresBrandSubmissionRepository = PostgresBaseRepository<BrandSubmissionEntity>;

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Article>, RepoError> {
        let rows = ArticleEntity::find()
            .filter(article::Column::Category.eq(category.as_str()))
            .order_by_desc(article::Column::PublishedAt)
            .all(&self.db)
            .await
            .map_err(backend_error)?;

        decode_rows(rows)
    }

    async fn find_featured(&self) -> Result<Vec<Article>, RepoError> {
        let rows = ArticleEntity::find()
            .filter(article::Column::Featured.eq(true))
            .order_by_desc(article::Column::PublishedAt)
            .all(&self.db)
            .await
            .map_err(backend_error)?;

        decode_rows(rows)
    }

    async fn find_by_brand(&self, brand_id: Uuid) -> Result<Vec<Article>, RepoError> {
        // JSONB containment: brand_ids @> '["<id>"]'
        let rows = ArticleEntity::find()
            .filter(Expr::cust_with_values(
                "brand_ids @> ?",
                [serde_json::json!([brand_id])],
            ))
            .order_by_desc(article::Column::PublishedAt)
            .all(&self.db)
            .await
            .map_err(backend_error)?;

        decode_rows(rows)
    }
}

#[async_trait]
impl BrandRepository for PostgresBrandRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Brand>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = BrandEntity::find()
            .filter(brand::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(brand::Column::Name)
            .all(&self.db)
            .await
            .map_err(backend_error)?;

        decode_rows(rows)
    }
}

#[async_trait]
impl SubmissionRepository<ArticleSubmission> for PostgresSubmissionRepository {
    async fn find_by_status(
        &self,
        status: SubmissionStatus,
    ) -> Result<Vec<ArticleSubmission>, RepoError> {
        let rows = SubmissionEntity::find()
            .filter(submission::Column::Status.eq(status.as_str()))
            .order_by_asc(submission::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(backend_error)?;

        decode_rows(rows)
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<ArticleSubmission>, RepoError> {
        let rows = SubmissionEntity::find()
            .filter(submission::Column::AuthorId.eq(author_id))
            .order_by_desc(submission::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(backend_error)?;

        decode_rows(rows)
    }
}

#[async_trait]
impl SubmissionRepository<BrandSubmission> for PostgresBrandSubmissionRepository {
    async fn find_by_status(
        &self,
        status: SubmissionStatus,
    ) -> Result<Vec<BrandSubmission>, RepoError> {
        let rows = BrandSubmissionEntity::find()
            .filter(brand_submission::Column::Status.eq(status.as_str()))
            .order_by_asc(brand_submission::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(backend_error)?;

        decode_rows(rows)
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<BrandSubmission>, RepoError> {
        let rows = BrandSubmissionEntity::find()
            .filter(brand_submission::Column::AuthorId.eq(author_id))
            .order_by_desc(brand_submission::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(backend_error)?;

        decode_rows(rows)
    }
}
