use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExperienceImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ExperienceImages::ExperienceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExperienceImages::Image).text().not_null())
                    .col(
                        ColumnDef::new(ExperienceImages::Caption)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ExperienceImages::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ExperienceImages::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_images_experience_id")
                            .from(ExperienceImages::Table, ExperienceImages::ExperienceId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experience_images_experience_id
                ON experience_images (experience_id, "order");
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
                DROP INDEX IF EXISTS idx_experience_images_experience_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExperienceImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ExperienceImages {
    Table,
    Id,
    ExperienceId,
    Image,
    Caption,
    Order,
    UploadedAt,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
}
