// src/shared/attachments.rs
//
// Ordered child collections (project screenshots, workplace images) share one
// lifecycle: rows are inserted with `order` = position in the upload list, and
// an update that supplies new files replaces the whole set. The per-entity
// tables differ only in their parent column, so the manager is generic over a
// descriptor.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter,
};
use uuid::Uuid;

/// One uploaded file reference plus its caption, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttachment {
    pub image: String,
    pub caption: String,
}

/// Descriptor tying an attachment table to its parent relation.
pub trait AttachmentDef {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + Send;

    fn parent_column() -> <Self::Entity as EntityTrait>::Column;
    fn build_row(parent_id: Uuid, position: i32, file: &NewAttachment) -> Self::ActiveModel;
    fn image_ref(model: &<Self::Entity as EntityTrait>::Model) -> String;
}

/// Insert `files` for `parent_id` with ordinals `0..n-1` in submission order.
pub async fn insert_ordered<D, C>(
    conn: &C,
    parent_id: Uuid,
    files: &[NewAttachment],
) -> Result<(), DbErr>
where
    D: AttachmentDef,
    C: ConnectionTrait,
    <D::Entity as EntityTrait>::Model: IntoActiveModel<D::ActiveModel>,
{
    if files.is_empty() {
        return Ok(());
    }

    let rows = files
        .iter()
        .enumerate()
        .map(|(position, file)| D::build_row(parent_id, position as i32, file));

    <D::Entity as EntityTrait>::insert_many(rows)
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

/// Full replace: delete every existing child of `parent_id`, then insert the
/// new set with fresh ordinals. Returns the displaced file references so the
/// caller can discard the blobs after the transaction commits. Callers that
/// received no new files must not call this — omitting files on update leaves
/// the existing children untouched.
pub async fn replace_ordered<D, C>(
    conn: &C,
    parent_id: Uuid,
    files: &[NewAttachment],
) -> Result<Vec<String>, DbErr>
where
    D: AttachmentDef,
    C: ConnectionTrait,
    <D::Entity as EntityTrait>::Model: IntoActiveModel<D::ActiveModel>,
{
    let displaced = delete_for_parent::<D, C>(conn, parent_id).await?;
    insert_ordered::<D, C>(conn, parent_id, files).await?;
    Ok(displaced)
}

/// Delete all children of `parent_id`, returning their file references for
/// best-effort blob cleanup.
pub async fn delete_for_parent<D, C>(conn: &C, parent_id: Uuid) -> Result<Vec<String>, DbErr>
where
    D: AttachmentDef,
    C: ConnectionTrait,
{
    let existing = <D::Entity as EntityTrait>::find()
        .filter(D::parent_column().eq(parent_id))
        .all(conn)
        .await?;

    let refs: Vec<String> = existing.iter().map(|m| D::image_ref(m)).collect();

    <D::Entity as EntityTrait>::delete_many()
        .filter(D::parent_column().eq(parent_id))
        .exec(conn)
        .await?;

    Ok(refs)
}
