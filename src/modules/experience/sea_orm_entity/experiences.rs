use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::shared::manage::ManagedEntity;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[sea_orm(string_value = "full-time")]
    FullTime,
    #[sea_orm(string_value = "part-time")]
    PartTime,
    #[sea_orm(string_value = "contract")]
    Contract,
    #[sea_orm(string_value = "freelance")]
    Freelance,
    #[sea_orm(string_value = "internship")]
    Internship,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum EmploymentStatus {
    #[sea_orm(string_value = "current")]
    Current,
    #[sea_orm(string_value = "past")]
    Past,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub position: String,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub company_name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub company_logo: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    pub employment_type: EmploymentType,
    pub employment_status: EmploymentStatus,

    pub start_date: Date,

    // Ignored while currently_working is set.
    pub end_date: Option<Date>,

    pub currently_working: bool,

    #[sea_orm(column_type = "Text")]
    pub short_description: String,

    #[sea_orm(column_type = "Text")]
    pub detailed_description: String,

    pub is_active: bool,
    pub is_draft: bool,
    pub order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::experience_images::Entity")]
    Images,
}

impl Related<super::experience_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
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

        if let ActiveValue::Set(position) = &self.position {
            self.position = Set(position.trim().to_string());
        }

        Ok(self)
    }
}

pub struct ExperienceManaged;

impl ManagedEntity for ExperienceManaged {
    type Entity = Entity;

    fn id_column() -> Column {
        Column::Id
    }

    fn active_column() -> Column {
        Column::IsActive
    }
}
