//! Article submission entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use sockpress_core::RepoError;
use sockpress_core::domain::{ArticleDraft, ArticleSubmission, Review};

use super::{decode_error, decode_list, encode_list};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    pub category: String,
    pub image: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub brand_ids: Json,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub moderation_comment: Option<String>,
    #[sea_orm(nullable)]
    pub published_entity_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ArticleSubmission {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            author_id: model.author_id,
            draft: ArticleDraft {
                title: model.title,
                excerpt: model.excerpt,
                category: model
                    .category
                    .parse()
                    .map_err(|e| decode_error("category", e))?,
                image: model.image,
                content: model.content,
                brand_ids: decode_list("brand_ids", model.brand_ids)?,
            },
            review: Review {
                status: model
                    .status
                    .parse()
                    .map_err(|e| decode_error("status", e))?,
                moderation_comment: model.moderation_comment,
                published_entity_id: model.published_entity_id,
            },
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

impl From<ArticleSubmission> for ActiveModel {
    fn from(submission: ArticleSubmission) -> Self {
        let draft = submission.draft;
        let review = submission.review;
        Self {
            id: Set(submission.id),
            author_id: Set(submission.author_id),
            title: Set(draft.title),
            excerpt: Set(draft.excerpt),
            category: Set(draft.category.as_str().to_string()),
            image: Set(draft.image),
            content: Set(draft.content),
            brand_ids: Set(encode_list(&draft.brand_ids)),
            status: Set(review.status.as_str().to_string()),
            moderation_comment: Set(review.moderation_comment),
            published_entity_id: Set(review.published_entity_id),
            created_at: Set(submission.created_at.into()),
            updated_at: Set(submission.updated_at.into()),
        }
    }
}
