use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// Which entity family a category groups.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    #[sea_orm(string_value = "project")]
    Project,
    #[sea_orm(string_value = "skill")]
    Skill,
    #[sea_orm(string_value = "achievement")]
    Achievement,
    #[sea_orm(string_value = "experience")]
    Experience,
}

impl CategoryType {
    pub fn display(&self) -> &'static str {
        match self {
            CategoryType::Project => "Project",
            CategoryType::Skill => "Skill",
            CategoryType::Achievement => "Achievement",
            CategoryType::Experience => "Experience",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    // Globally unique across all category types.
    #[sea_orm(column_type = "Text")]
    pub slug: String,

    pub category_type: CategoryType,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    // FontAwesome icon class, e.g. "fas fa-globe".
    #[sea_orm(column_type = "Text")]
    pub icon: String,

    // Hex color code, e.g. "#3b82f6".
    #[sea_orm(column_type = "Text")]
    pub color: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::modules::project::sea_orm_entity::projects::Entity")]
    Projects,

    #[sea_orm(has_many = "crate::modules::skill::sea_orm_entity::Entity")]
    Skills,
}

impl Related<crate::modules::project::sea_orm_entity::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<crate::modules::skill::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
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

        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        Ok(self)
    }
}
