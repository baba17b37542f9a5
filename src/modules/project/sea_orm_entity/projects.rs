use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::shared::manage::ManagedEntity;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "on-hold")]
    OnHold,
    #[sea_orm(string_value = "draft")]
    Draft,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    // Display name shown on cards when it differs from the title.
    #[sea_orm(column_type = "Text", nullable)]
    pub project_name: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // HTML documentation body.
    #[sea_orm(column_type = "Text", nullable)]
    pub documentation: Option<String>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub category_id: Option<Uuid>,

    // Comma-separated technology names.
    #[sea_orm(column_type = "Text")]
    pub technologies: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub demo_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub other_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail: Option<String>,

    pub start_date: Option<Date>,
    pub end_date: Option<Date>,

    #[sea_orm(column_type = "Text", nullable)]
    pub client: Option<String>,

    pub status: ProjectStatus,

    pub is_active: bool,
    pub is_featured: bool,
    pub is_draft: bool,

    pub views: i32,
    pub likes: i32,
    pub order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::category::sea_orm_entity::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::category::sea_orm_entity::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,

    #[sea_orm(has_many = "super::project_screenshots::Entity")]
    Screenshots,
}

impl Related<crate::modules::category::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::project_screenshots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Screenshots.def()
    }
}

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

/// Descriptor for the manage-page visibility toggle.
pub struct ProjectManaged;

impl ManagedEntity for ProjectManaged {
    type Entity = Entity;

    fn id_column() -> Column {
        Column::Id
    }

    fn active_column() -> Column {
        Column::IsActive
    }
}
