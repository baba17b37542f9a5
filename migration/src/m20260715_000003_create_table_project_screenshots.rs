use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectScreenshots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectScreenshots::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ProjectScreenshots::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectScreenshots::Image).text().not_null())
                    .col(
                        ColumnDef::new(ProjectScreenshots::Caption)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ProjectScreenshots::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectScreenshots::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_screenshots_project_id")
                            .from(ProjectScreenshots::Table, ProjectScreenshots::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Children are always read per parent, in ordinal order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_screenshots_project_id
                ON project_screenshots (project_id, "order");
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
                DROP INDEX IF EXISTS idx_project_screenshots_project_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectScreenshots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectScreenshots {
    Table,
    Id,
    ProjectId,
    Image,
    Caption,
    Order,
    UploadedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
