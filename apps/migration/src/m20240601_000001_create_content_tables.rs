use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(uuid_pk(Articles::Id))
                    .col(ColumnDef::new(Articles::Title).string().not_null())
                    .col(ColumnDef::new(Articles::Excerpt).text().not_null())
                    .col(ColumnDef::new(Articles::Category).string().not_null())
                    .col(ColumnDef::new(Articles::Image).string().not_null())
                    .col(
                        ColumnDef::new(Articles::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Articles::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Articles::Content).text().null())
                    .col(json_list(Articles::BrandIds))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Brands::Table)
                    .if_not_exists()
                    .col(uuid_pk(Brands::Id))
                    .col(ColumnDef::new(Brands::Name).string().not_null())
                    .col(ColumnDef::new(Brands::Logo).string().not_null())
                    .col(ColumnDef::new(Brands::CoverImage).string().null())
                    .col(ColumnDef::new(Brands::Description).text().not_null())
                    .col(ColumnDef::new(Brands::Website).string().not_null())
                    .col(json_list(Brands::Tags))
                    .col(json_list(Brands::Countries))
                    .col(json_list(Brands::PriceTiers))
                    .col(ColumnDef::new(Brands::Founded).integer().null())
                    .col(ColumnDef::new(Brands::Headquarters).string().not_null())
                    .col(
                        ColumnDef::new(Brands::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .to_owned(),
            )
            .await?;

        let mut submissions = Table::create();
        submissions
            .table(Submissions::Table)
            .if_not_exists()
            .col(uuid_pk(Submissions::Id))
            .col(ColumnDef::new(Submissions::AuthorId).uuid().not_null())
            .col(ColumnDef::new(Submissions::Title).string().not_null())
            .col(ColumnDef::new(Submissions::Excerpt).text().not_null())
            .col(ColumnDef::new(Submissions::Category).string().not_null())
            .col(ColumnDef::new(Submissions::Image).string().not_null())
            .col(ColumnDef::new(Submissions::Content).text().null())
            .col(json_list(Submissions::BrandIds));
        review_columns(&mut submissions);
        manager.create_table(submissions).await?;

        let mut brand_submissions = Table::create();
        brand_submissions
            .table(BrandSubmissions::Table)
            .if_not_exists()
            .col(uuid_pk(BrandSubmissions::Id))
            .col(ColumnDef::new(BrandSubmissions::AuthorId).uuid().not_null())
            .col(ColumnDef::new(BrandSubmissions::Name).string().not_null())
            .col(ColumnDef::new(BrandSubmissions::Logo).string().not_null())
            .col(ColumnDef::new(BrandSubmissions::CoverImage).string().null())
            .col(ColumnDef::new(BrandSubmissions::Description).text().not_null())
            .col(ColumnDef::new(BrandSubmissions::Website).string().not_null())
            .col(json_list(BrandSubmissions::Tags))
            .col(json_list(BrandSubmissions::Countries))
            .col(json_list(BrandSubmissions::PriceTiers))
            .col(ColumnDef::new(BrandSubmissions::Founded).integer().null())
            .col(
                ColumnDef::new(BrandSubmissions::Headquarters)
                    .string()
                    .not_null(),
            );
        review_columns(&mut brand_submissions);
        manager.create_table(brand_submissions).await?;

        // The moderation queue filters on status.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_status")
                    .table(Submissions::Table)
                    .col(Review::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_brand_submissions_status")
                    .table(BrandSubmissions::Table)
                    .col(Review::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BrandSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Brands::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

fn uuid_pk(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col).uuid().not_null().primary_key().to_owned()
}

/// JSON array column, empty by default.
fn json_list(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col)
        .json_binary()
        .not_null()
        .default(Expr::cust("'[]'::jsonb"))
        .to_owned()
}

/// Moderation columns shared by both submission tables.
fn review_columns(table: &mut TableCreateStatement) {
    table
        .col(
            ColumnDef::new(Review::Status)
                .string()
                .not_null()
                .default("pending"),
        )
        .col(ColumnDef::new(Review::ModerationComment).text().null())
        .col(ColumnDef::new(Review::PublishedEntityId).uuid().null())
        .col(
            ColumnDef::new(Review::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Review::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        );
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Id,
    Title,
    Excerpt,
    Category,
    Image,
    PublishedAt,
    Featured,
    Content,
    BrandIds,
}

#[derive(DeriveIden)]
enum Brands {
    Table,
    Id,
    Name,
    Logo,
    CoverImage,
    Description,
    Website,
    Tags,
    Countries,
    PriceTiers,
    Founded,
    Headquarters,
    Rating,
}

#[derive(DeriveIden)]
enum Submissions {
    Table,
    Id,
    AuthorId,
    Title,
    Excerpt,
    Category,
    Image,
    Content,
    BrandIds,
}

#[derive(DeriveIden)]
enum BrandSubmissions {
    Table,
    Id,
    AuthorId,
    Name,
    Logo,
    CoverImage,
    Description,
    Website,
    Tags,
    Countries,
    PriceTiers,
    Founded,
    Headquarters,
}

/// Columns common to `submissions` and `brand_submissions`.
#[derive(DeriveIden)]
enum Review {
    Status,
    ModerationComment,
    PublishedEntityId,
    CreatedAt,
    UpdatedAt,
}
