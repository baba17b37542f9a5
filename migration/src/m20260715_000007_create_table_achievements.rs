use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Achievements::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Achievements::Slug).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Achievements::Category)
                            .string_len(20)
                            .not_null()
                            .default("other"),
                    )
                    .col(ColumnDef::new(Achievements::Description).text())
                    .col(
                        ColumnDef::new(Achievements::IssuingOrganization)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::AchievementDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Achievements::ExpirationDate).date())
                    .col(
                        ColumnDef::new(Achievements::NoExpiration)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Achievements::IconType)
                            .string_len(20)
                            .not_null()
                            .default("fontawesome"),
                    )
                    .col(ColumnDef::new(Achievements::IconClass).string_len(100))
                    .col(ColumnDef::new(Achievements::IconImage).text())
                    .col(
                        ColumnDef::new(Achievements::CredentialType)
                            .string_len(10)
                            .not_null()
                            .default("link"),
                    )
                    .col(ColumnDef::new(Achievements::CredentialFile).text())
                    .col(ColumnDef::new(Achievements::CredentialUrl).text())
                    .col(
                        ColumnDef::new(Achievements::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Achievements::IsDraft)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Achievements::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Achievements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Achievements::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_achievements_slug_unique
                ON achievements (lower(slug));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_achievements_updated_at
                BEFORE UPDATE ON achievements
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
                DROP TRIGGER IF EXISTS update_achievements_updated_at ON achievements;
                DROP INDEX IF EXISTS idx_achievements_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    Title,
    Slug,
    Category,
    Description,
    IssuingOrganization,
    AchievementDate,
    ExpirationDate,
    NoExpiration,
    IconType,
    IconClass,
    IconImage,
    CredentialType,
    CredentialFile,
    CredentialUrl,
    IsActive,
    IsDraft,
    Order,
    CreatedAt,
    UpdatedAt,
}
