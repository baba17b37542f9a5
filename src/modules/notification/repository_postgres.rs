// src/modules/notification/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::ports::{
    NotificationCounts, NotificationFields, NotificationFilter, NotificationRepository,
    NotificationRepositoryError, NotificationResult,
};
use super::sea_orm_entity::{
    self as notifications, ActiveModel, Column, Entity, NotificationType,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct NotificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn count_where(
        &self,
        condition: sea_orm::Condition,
    ) -> Result<u64, NotificationRepositoryError> {
        Entity::find()
            .filter(condition)
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn save(
        &self,
        notification_id: Option<Uuid>,
        fields: NotificationFields,
    ) -> Result<NotificationResult, NotificationRepositoryError> {
        match notification_id {
            None => {
                let model = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    title: Set(fields.title),
                    message: Set(fields.message),
                    notification_type: Set(fields.notification_type),
                    link: Set(fields.link),
                    link_text: Set(fields.link_text),
                    is_read: Set(false),
                    is_active: Set(true),
                    created_at: Set(Utc::now().fixed_offset()),
                };

                let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
                Ok(model_to_result(inserted))
            }
            Some(id) => {
                // Existence check keeps the update's NotFound distinct from
                // database failures.
                Entity::find_by_id(id)
                    .one(&*self.db)
                    .await
                    .map_err(map_db_err)?
                    .ok_or(NotificationRepositoryError::NotFound)?;

                let model = ActiveModel {
                    id: Set(id),
                    title: Set(fields.title),
                    message: Set(fields.message),
                    notification_type: Set(fields.notification_type),
                    link: Set(fields.link),
                    link_text: Set(fields.link_text),
                    ..Default::default()
                };

                let updated = model.update(&*self.db).await.map_err(map_db_err)?;
                Ok(model_to_result(updated))
            }
        }
    }

    async fn get(
        &self,
        notification_id: Uuid,
    ) -> Result<NotificationResult, NotificationRepositoryError> {
        Entity::find_by_id(notification_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_result)
            .ok_or(NotificationRepositoryError::NotFound)
    }

    async fn list(
        &self,
        filter: NotificationFilter,
    ) -> Result<Vec<NotificationResult>, NotificationRepositoryError> {
        let mut query = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::CreatedAt);

        query = match filter {
            NotificationFilter::All => query,
            NotificationFilter::Unread => query.filter(Column::IsRead.eq(false)),
            NotificationFilter::Read => query.filter(Column::IsRead.eq(true)),
            NotificationFilter::Type(ty) => query.filter(Column::NotificationType.eq(ty)),
        };

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn counts(&self) -> Result<NotificationCounts, NotificationRepositoryError> {
        use sea_orm::Condition;

        let active = || Condition::all().add(Column::IsActive.eq(true));
        let by_type = |ty: NotificationType| active().add(Column::NotificationType.eq(ty));

        Ok(NotificationCounts {
            total: self.count_where(active()).await?,
            unread: self.count_where(active().add(Column::IsRead.eq(false))).await?,
            read: self.count_where(active().add(Column::IsRead.eq(true))).await?,
            info: self.count_where(by_type(NotificationType::Info)).await?,
            success: self.count_where(by_type(NotificationType::Success)).await?,
            warning: self.count_where(by_type(NotificationType::Warning)).await?,
            error: self.count_where(by_type(NotificationType::Error)).await?,
        })
    }

    async fn delete(&self, notification_id: Uuid) -> Result<(), NotificationRepositoryError> {
        let result = Entity::delete_by_id(notification_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(NotificationRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn mark_read(&self, notification_id: Uuid) -> Result<(), NotificationRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(notification_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(NotificationRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn mark_all_read(&self) -> Result<u64, NotificationRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::IsActive.eq(true))
            .filter(Column::IsRead.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: notifications::Model) -> NotificationResult {
    NotificationResult {
        id: model.id,
        title: model.title,
        message: model.message,
        notification_type: model.notification_type,
        link: model.link,
        link_text: model.link_text,
        is_read: model.is_read,
        is_active: model.is_active,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> NotificationRepositoryError {
    NotificationRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
