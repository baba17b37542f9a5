use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Slug).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::CategoryId).uuid())
                    .col(ColumnDef::new(Skills::Description).text())
                    .col(
                        ColumnDef::new(Skills::SkillLevel)
                            .string_len(20)
                            .not_null()
                            .default("beginner"),
                    )
                    .col(
                        ColumnDef::new(Skills::Proficiency)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Skills::YearsOfExperience)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Skills::IconType)
                            .string_len(20)
                            .not_null()
                            .default("fontawesome"),
                    )
                    .col(ColumnDef::new(Skills::IconClass).string_len(100))
                    .col(ColumnDef::new(Skills::IconImage).text())
                    .col(
                        ColumnDef::new(Skills::CertificateType)
                            .string_len(10)
                            .not_null()
                            .default("link"),
                    )
                    .col(ColumnDef::new(Skills::CertificateFile).text())
                    .col(ColumnDef::new(Skills::CertificateUrl).text())
                    .col(
                        ColumnDef::new(Skills::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Skills::IsDraft)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Skills::Order).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Skills::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_category_id")
                            .from(Skills::Table, Skills::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_skills_slug_unique
                ON skills (lower(slug));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_category_id
                ON skills (category_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_skills_updated_at
                BEFORE UPDATE ON skills
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
                DROP TRIGGER IF EXISTS update_skills_updated_at ON skills;
                DROP INDEX IF EXISTS idx_skills_slug_unique;
                DROP INDEX IF EXISTS idx_skills_category_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Slug,
    CategoryId,
    Description,
    SkillLevel,
    Proficiency,
    YearsOfExperience,
    IconType,
    IconClass,
    IconImage,
    CertificateType,
    CertificateFile,
    CertificateUrl,
    IsActive,
    IsDraft,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}
