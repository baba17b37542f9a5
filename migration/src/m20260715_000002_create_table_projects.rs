use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Projects::Slug).string_len(200).not_null())
                    .col(ColumnDef::new(Projects::ProjectName).string_len(200))
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::Documentation).text())
                    .col(ColumnDef::new(Projects::CategoryId).uuid())
                    .col(
                        ColumnDef::new(Projects::Technologies)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::LiveUrl).text())
                    .col(ColumnDef::new(Projects::DemoUrl).text())
                    .col(ColumnDef::new(Projects::OtherUrl).text())
                    .col(ColumnDef::new(Projects::Thumbnail).text())
                    .col(ColumnDef::new(Projects::StartDate).date())
                    .col(ColumnDef::new(Projects::EndDate).date())
                    .col(ColumnDef::new(Projects::Client).string_len(200))
                    .col(
                        ColumnDef::new(Projects::Status)
                            .string_len(20)
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(Projects::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Projects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::IsDraft)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Projects::Views).integer().not_null().default(0))
                    .col(ColumnDef::new(Projects::Likes).integer().not_null().default(0))
                    .col(ColumnDef::new(Projects::Order).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_category_id")
                            .from(Projects::Table, Projects::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_projects_slug_unique
                ON projects (lower(slug));
                "#,
            )
            .await?;

        // Fast lookup for category filters and item counts
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_category_id
                ON projects (category_id);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_projects_updated_at
                BEFORE UPDATE ON projects
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_projects_updated_at ON projects;
                DROP INDEX IF EXISTS idx_projects_slug_unique;
                DROP INDEX IF EXISTS idx_projects_category_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Slug,
    ProjectName,
    Description,
    Documentation,
    CategoryId,
    Technologies,
    GithubUrl,
    LiveUrl,
    DemoUrl,
    OtherUrl,
    Thumbnail,
    StartDate,
    EndDate,
    Client,
    Status,
    IsActive,
    IsFeatured,
    IsDraft,
    Views,
    Likes,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}
