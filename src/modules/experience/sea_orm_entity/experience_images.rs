use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::attachments::{AttachmentDef, NewAttachment};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience_images")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub experience_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    #[sea_orm(column_type = "Text")]
    pub caption: String,

    // Position in the upload list, 0-based.
    pub order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub uploaded_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experiences::Entity",
        from = "Column::ExperienceId",
        to = "super::experiences::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Experience,
}

impl Related<super::experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experience.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Attachment descriptor: workplace images belong to exactly one experience.
pub struct ExperienceImageDef;

impl AttachmentDef for ExperienceImageDef {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn parent_column() -> Column {
        Column::ExperienceId
    }

    fn build_row(parent_id: Uuid, position: i32, file: &NewAttachment) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            experience_id: Set(parent_id),
            image: Set(file.image.clone()),
            caption: Set(file.caption.clone()),
            order: Set(position),
            uploaded_at: Set(Utc::now().fixed_offset()),
        }
    }

    fn image_ref(model: &Model) -> String {
        model.image.clone()
    }
}
