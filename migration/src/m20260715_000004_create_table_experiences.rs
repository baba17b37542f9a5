use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Experiences::Position)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::Slug).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Experiences::CompanyName)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::CompanyLogo).text())
                    .col(ColumnDef::new(Experiences::Location).string_len(200))
                    .col(
                        ColumnDef::new(Experiences::EmploymentType)
                            .string_len(20)
                            .not_null()
                            .default("full-time"),
                    )
                    .col(
                        ColumnDef::new(Experiences::EmploymentStatus)
                            .string_len(10)
                            .not_null()
                            .default("past"),
                    )
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(
                        ColumnDef::new(Experiences::CurrentlyWorking)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Experiences::ShortDescription)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::DetailedDescription)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Experiences::IsDraft)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Experiences::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
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
                CREATE UNIQUE INDEX IF NOT EXISTS idx_experiences_slug_unique
                ON experiences (lower(slug));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_experiences_updated_at
                BEFORE UPDATE ON experiences
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
                DROP TRIGGER IF EXISTS update_experiences_updated_at ON experiences;
                DROP INDEX IF EXISTS idx_experiences_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Position,
    Slug,
    CompanyName,
    CompanyLogo,
    Location,
    EmploymentType,
    EmploymentStatus,
    StartDate,
    EndDate,
    CurrentlyWorking,
    ShortDescription,
    DetailedDescription,
    IsActive,
    IsDraft,
    Order,
    CreatedAt,
    UpdatedAt,
}
