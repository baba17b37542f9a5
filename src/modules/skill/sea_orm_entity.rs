use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::shared::manage::ManagedEntity;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "advanced")]
    Advanced,
    #[sea_orm(string_value = "expert")]
    Expert,
}

impl SkillLevel {
    pub fn display(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

/// How the skill icon is sourced: an uploaded image or a FontAwesome class.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    #[sea_orm(string_value = "upload")]
    Upload,
    #[sea_orm(string_value = "fontawesome")]
    Fontawesome,
}

/// How the certificate is referenced: an uploaded file or an external link.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum CertificateType {
    #[sea_orm(string_value = "file")]
    File,
    #[sea_orm(string_value = "link")]
    Link,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub category_id: Option<Uuid>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub skill_level: SkillLevel,

    // 0..=100, enforced at the validation layer.
    pub proficiency: i32,

    pub years_of_experience: i32,

    pub icon_type: IconType,

    #[sea_orm(column_type = "Text", nullable)]
    pub icon_class: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub icon_image: Option<String>,

    pub certificate_type: CertificateType,

    #[sea_orm(column_type = "Text", nullable)]
    pub certificate_file: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub certificate_url: Option<String>,

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
    #[sea_orm(
        belongs_to = "crate::modules::category::sea_orm_entity::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::category::sea_orm_entity::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<crate::modules::category::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
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

pub struct SkillManaged;

impl ManagedEntity for SkillManaged {
    type Entity = Entity;

    fn id_column() -> Column {
        Column::Id
    }

    fn active_column() -> Column {
        Column::IsActive
    }
}
