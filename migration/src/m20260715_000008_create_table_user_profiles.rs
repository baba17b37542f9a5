use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::FullName)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserProfiles::Email).string_len(254).not_null())
                    .col(ColumnDef::new(UserProfiles::Phone).string_len(20))
                    .col(ColumnDef::new(UserProfiles::Location).string_len(200))
                    .col(ColumnDef::new(UserProfiles::Title).string_len(200).not_null())
                    .col(ColumnDef::new(UserProfiles::Bio).text())
                    .col(ColumnDef::new(UserProfiles::ProfileImage).text())
                    .col(ColumnDef::new(UserProfiles::Github).text())
                    .col(ColumnDef::new(UserProfiles::Linkedin).text())
                    .col(ColumnDef::new(UserProfiles::Twitter).text())
                    .col(ColumnDef::new(UserProfiles::Instagram).text())
                    .col(ColumnDef::new(UserProfiles::Youtube).text())
                    .col(ColumnDef::new(UserProfiles::Website).text())
                    .col(ColumnDef::new(UserProfiles::ContactEmail).string_len(254))
                    .col(ColumnDef::new(UserProfiles::ContactPhone).string_len(20))
                    .col(ColumnDef::new(UserProfiles::Address).string_len(300))
                    .col(ColumnDef::new(UserProfiles::City).string_len(100))
                    .col(ColumnDef::new(UserProfiles::State).string_len(100))
                    .col(ColumnDef::new(UserProfiles::Country).string_len(100))
                    .col(ColumnDef::new(UserProfiles::Resume).text())
                    .col(ColumnDef::new(UserProfiles::CoverLetter).text())
                    .col(ColumnDef::new(UserProfiles::VideoResume).text())
                    .col(ColumnDef::new(UserProfiles::MetaTitle).string_len(60))
                    .col(ColumnDef::new(UserProfiles::MetaDescription).string_len(160))
                    .col(ColumnDef::new(UserProfiles::MetaKeywords).string_len(300))
                    .col(
                        ColumnDef::new(UserProfiles::Status)
                            .string_len(20)
                            .not_null()
                            .default("available"),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::WorkType)
                            .string_len(20)
                            .not_null()
                            .default("remote"),
                    )
                    .col(ColumnDef::new(UserProfiles::HourlyRate).decimal_len(10, 2))
                    .col(
                        ColumnDef::new(UserProfiles::ExperienceYears)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::OpenToOpportunities)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::AvailableForFreelance)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedAt)
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
                CREATE TRIGGER update_user_profiles_updated_at
                BEFORE UPDATE ON user_profiles
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
                DROP TRIGGER IF EXISTS update_user_profiles_updated_at ON user_profiles;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    Id,
    FullName,
    Email,
    Phone,
    Location,
    Title,
    Bio,
    ProfileImage,
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Youtube,
    Website,
    ContactEmail,
    ContactPhone,
    Address,
    City,
    State,
    Country,
    Resume,
    CoverLetter,
    VideoResume,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    Status,
    WorkType,
    HourlyRate,
    ExperienceYears,
    OpenToOpportunities,
    AvailableForFreelance,
    CreatedAt,
    UpdatedAt,
}
