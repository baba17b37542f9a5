use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::skill::sea_orm_entity::IconType;
use crate::shared::manage::ManagedEntity;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    #[sea_orm(string_value = "certification")]
    Certification,
    #[sea_orm(string_value = "award")]
    Award,
    #[sea_orm(string_value = "education")]
    Education,
    #[sea_orm(string_value = "milestone")]
    Milestone,
    #[sea_orm(string_value = "recognition")]
    Recognition,
    #[sea_orm(string_value = "other")]
    Other,
}

/// How the credential is referenced: an uploaded file or an external link.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    #[sea_orm(string_value = "file")]
    File,
    #[sea_orm(string_value = "link")]
    Link,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    pub category: AchievementCategory,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub issuing_organization: String,

    pub achievement_date: Date,

    // Ignored while no_expiration is set.
    pub expiration_date: Option<Date>,

    pub no_expiration: bool,

    pub icon_type: IconType,

    #[sea_orm(column_type = "Text", nullable)]
    pub icon_class: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub icon_image: Option<String>,

    pub credential_type: CredentialType,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_file: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_url: Option<String>,

    pub is_active: bool,
    pub is_draft: bool,
    pub order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}

pub struct AchievementManaged;

impl ManagedEntity for AchievementManaged {
    type Entity = Entity;

    fn id_column() -> Column {
        Column::Id
    }

    fn active_column() -> Column {
        Column::IsActive
    }
}
