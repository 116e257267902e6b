use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Article, Brand, Category, Reviewable, SubmissionStatus};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// Every call is a full round trip to the table store: no caching, no
/// retries, no pagination.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Select every row of the table.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (insert, or update on primary key conflict).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Article repository.
#[async_trait]
pub trait ArticleRepository: BaseRepository<Article, Uuid> {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Article>, RepoError>;

    async fn find_featured(&self) -> Result<Vec<Article>, RepoError>;

    /// Articles that link `brand_id` in their brand list.
    async fn find_by_brand(&self, brand_id: Uuid) -> Result<Vec<Article>, RepoError>;
}

/// Brand repository.
#[async_trait]
pub trait BrandRepository: BaseRepository<Brand, Uuid> {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Brand>, RepoError>;
}

/// Repository for article or brand submissions.
#[async_trait]
pub trait SubmissionRepository<S: Reviewable>: BaseRepository<S, Uuid> {
    async fn find_by_status(&self, status: SubmissionStatus) -> Result<Vec<S>, RepoError>;

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<S>, RepoError>;
}
