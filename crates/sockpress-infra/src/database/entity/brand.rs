//! Brand entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use sockpress_core::RepoError;
use sockpress_core::domain::Brand;

use super::{decode_list, encode_list};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
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
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Brand {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
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
            rating: model.rating,
        })
    }
}

impl From<Brand> for ActiveModel {
    fn from(brand: Brand) -> Self {
        Self {
            id: Set(brand.id),
            name: Set(brand.name),
            logo: Set(brand.logo),
            cover_image: Set(brand.cover_image),
            description: Set(brand.description),
            website: Set(brand.website),
            tags: Set(encode_list(&brand.tags)),
            countries: Set(encode_list(&brand.countries)),
            price_tiers: Set(encode_list(&brand.price_tiers)),
            founded: Set(brand.founded),
            headquarters: Set(brand.headquarters),
            rating: Set(brand.rating),
        }
    }
}
