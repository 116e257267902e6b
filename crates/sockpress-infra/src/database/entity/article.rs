//! Article entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use sockpress_core::RepoError;
use sockpress_core::domain::Article;

use super::{decode_error, decode_list, encode_list};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    pub category: String,
    pub image: String,
    pub published_at: DateTimeWithTimeZone,
    pub featured: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub brand_ids: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Article.
impl TryFrom<Model> for Article {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            excerpt: model.excerpt,
            category: model
                .category
                .parse()
                .map_err(|e| decode_error("category", e))?,
            image: model.image,
            published_at: model.published_at.into(),
            featured: model.featured,
            content: model.content,
            brand_ids: decode_list("brand_ids", model.brand_ids)?,
        })
    }
}

/// Conversion from Domain Article to SeaORM ActiveModel.
impl From<Article> for ActiveModel {
    fn from(article: Article) -> Self {
        Self {
            id: Set(article.id),
            title: Set(article.title),
            excerpt: Set(article.excerpt),
            category: Set(article.category.as_str().to_string()),
            image: Set(article.image),
            published_at: Set(article.published_at.into()),
            featured: Set(article.featured),
            content: Set(article.content),
            brand_ids: Set(encode_list(&article.brand_ids)),
        }
    }
}
