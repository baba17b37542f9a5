use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::attachments::{AttachmentDef, NewAttachment};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_screenshots")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub project_id: Uuid,

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
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Attachment descriptor: screenshots belong to exactly one project.
pub struct ScreenshotDef;

impl AttachmentDef for ScreenshotDef {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn parent_column() -> Column {
        Column::ProjectId
    }

    fn build_row(parent_id: Uuid, position: i32, file: &NewAttachment) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(parent_id),
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
