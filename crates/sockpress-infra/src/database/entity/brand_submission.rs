//! Brand submission entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use sockpress_core::RepoError;
use sockpress_core::domain::{BrandDraft, BrandSubmission, Review};

use super::{decode_error, decode_list, encode_list};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "brand_submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub name: String,
    pub logo: String,
    #[sea_orm(nullable)]
    pub cover_image: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub website: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub countries: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub price_tiers: Json,
    #[sea_orm(nullable)]
    pub founded: Option<i32>,
    pub headquarters: String,
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

impl TryFrom<Model> for BrandSubmission {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            author_id: model.author_id,
            draft: BrandDraft {
                name: model.name,
                logo: model.logo,
                cover_image: model.cover_image,
                description: model.description,
                website: model.website,
                tags: decode_list("tags", model.tags)?,
                countries: decode_list("countries", model.countries)?,
                price_tiers: decode_list("price_tiers", model.price_tiers)?,
                founded: model.founded,
                headquarters: model.headquarters,
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

impl From<BrandSubmission> for ActiveModel {
    fn from(submission: BrandSubmission) -> Self {
        let draft = submission.draft;
        let review = submission.review;
        Self {
            id: Set(submission.id),
            author_id: Set(submission.author_id),
            name: Set(draft.name),
            logo: Set(draft.logo),
            cover_image: Set(draft.cover_image),
            description: Set(draft.description),
            website: Set(draft.website),
            tags: Set(encode_list(&draft.tags)),
            countries: Set(encode_list(&draft.countries)),
            price_tiers: Set(encode_list(&draft.price_tiers)),
            founded: Set(draft.founded),
            headquarters: Set(draft.headquarters),
            status: Set(review.status.as_str().to_string()),
            moderation_comment: Set(review.moderation_comment),
            published_entity_id: Set(review.published_entity_id),
            created_at: Set(submission.created_at.into()),
            updated_at: Set(submission.updated_at.into()),
        }
    }
}
