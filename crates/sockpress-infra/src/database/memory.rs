//! In-memory repositories - used when no table store is configured.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use sockpress_core::RepoError;
use sockpress_core::domain::{
    Article, ArticleSubmission, Brand, BrandSubmission, Category, Identifiable, Reviewable,
    SubmissionStatus,
};
use sockpress_core::ports::{
    ArticleRepository, BaseRepository, BrandRepository, SubmissionRepository,
};

/// Table held in a `Vec`, preserving insertion order.
pub struct InMemoryRepository<T> {
    rows: RwLock<Vec<T>>,
}

pub type InMemoryArticleRepository = InMemoryRepository<Article>;
pub type InMemoryBrandRepository = InMemoryRepository<Brand>;
pub type InMemorySubmissionRepository = InMemoryRepository<ArticleSubmission>;
pub type InMemoryBrandSubmissionRepository = InMemoryRepository<BrandSubmission>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Seed a repository with existing rows.
    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> InMemoryRepository<T> {
    async fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let rows = self.rows.read().await;
        rows.iter().filter(|row| predicate(row)).cloned().collect()
    }
}

#[async_trait]
impl<T> BaseRepository<T, Uuid> for InMemoryRepository<T>
where
    T: Identifiable + Clone + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(existing) => *existing = entity.clone(),
            None => rows.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id() != id);

        if rows.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Article>, RepoError> {
        Ok(self.select(|a| a.category == category).await)
    }

    async fn find_featured(&self) -> Result<Vec<Article>, RepoError> {
        Ok(self.select(|a| a.featured).await)
    }

    async fn find_by_brand(&self, brand_id: Uuid) -> Result<Vec<Article>, RepoError> {
        Ok(self.select(|a| a.brand_ids.contains(&brand_id)).await)
    }
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Brand>, RepoError> {
        Ok(self.select(|b| ids.contains(&b.id)).await)
    }
}

#[async_trait]
impl<S: Reviewable> SubmissionRepository<S> for InMemoryRepository<S> {
    async fn find_by_status(&self, status: SubmissionStatus) -> Result<Vec<S>, RepoError> {
        Ok(self.select(|s| s.review().status == status).await)
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<S>, RepoError> {
        Ok(self.select(|s| s.author_id() == author_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sockpress_core::domain::ArticleDraft;

    fn article(title: &str, category: Category) -> Article {
        Article::new(ArticleDraft {
            title: title.into(),
            excerpt: String::new(),
            category,
            image: "img.jpg".into(),
            content: None,
            brand_ids: vec![],
        })
    }

    #[tokio::test]
    async fn test_save_is_an_upsert() {
        let repo = InMemoryArticleRepository::new();
        let mut a = article("First", Category::News);
        repo.save(a.clone()).await.unwrap();

        a.title = "Renamed".into();
        repo.save(a.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Renamed");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryArticleRepository::new();
        let a = repo.save(article("Gone", Category::Drops)).await.unwrap();

        repo.delete(a.id).await.unwrap();
        assert!(repo.find_by_id(a.id).await.unwrap().is_none());
        assert!(matches!(repo.delete(a.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_filters() {
        let brand_id = Uuid::new_v4();
        let mut featured = article("Cover", Category::Stories);
        featured.featured = true;
        featured.brand_ids = vec![brand_id];
        let repo = InMemoryArticleRepository::with_rows(vec![
            featured.clone(),
            article("Other", Category::News),
        ]);

        assert_eq!(repo.find_featured().await.unwrap(), vec![featured.clone()]);
        assert_eq!(
            repo.find_by_category(Category::News).await.unwrap().len(),
            1
        );
        assert_eq!(repo.find_by_brand(brand_id).await.unwrap(), vec![featured]);
    }

    #[tokio::test]
    async fn test_find_brands_by_ids() {
        let brand = |name: &str| {
            Brand::new(sockpress_core::domain::BrandDraft {
                name: name.into(),
                logo: String::new(),
                cover_image: None,
                description: String::new(),
                website: String::new(),
                tags: vec![],
                countries: vec![],
                price_tiers: vec![],
                founded: None,
                headquarters: String::new(),
            })
        };
        let (a, b) = (brand("Bombas"), brand("Stance"));
        let repo = InMemoryBrandRepository::with_rows(vec![a.clone(), b]);

        let found = repo.find_by_ids(&[a.id, Uuid::new_v4()]).await.unwrap();

        assert_eq!(found, vec![a]);
        assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());
    }
}
