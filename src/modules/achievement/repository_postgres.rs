// src/modules/achievement/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::ports::{
    AchievementCounts, AchievementFields, AchievementListFilter, AchievementRepository,
    AchievementRepositoryError, AchievementResult, DeletedAchievement,
};
use super::sea_orm_entity::{self as achievements, AchievementManaged, ActiveModel, Column, Entity};
use crate::shared::manage::{self, ToggleError};
use crate::shared::slug::{candidate, slugify};
use crate::shared::storage::{discard_blobs, FileStore};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct AchievementRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    files: Arc<dyn FileStore>,
}

impl AchievementRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, files: Arc<dyn FileStore>) -> Self {
        Self { db, files }
    }

    async fn free_slug(&self, display: &str) -> Result<String, AchievementRepositoryError> {
        let base = slugify(display);
        let mut attempt = 0;
        loop {
            let probe = candidate(&base, attempt);
            let taken = Entity::find()
                .filter(Column::Slug.eq(&probe))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .is_some();
            if !taken {
                return Ok(probe);
            }
            attempt += 1;
        }
    }

    async fn find_existing(
        &self,
        achievement_id: Uuid,
    ) -> Result<achievements::Model, AchievementRepositoryError> {
        Entity::find_by_id(achievement_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(AchievementRepositoryError::NotFound)
    }
}

#[async_trait]
impl AchievementRepository for AchievementRepositoryPostgres {
    async fn create(
        &self,
        fields: AchievementFields,
    ) -> Result<AchievementResult, AchievementRepositoryError> {
        let slug = match &fields.slug {
            Some(explicit) => explicit.clone(),
            None => self.free_slug(&fields.title).await?,
        };
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(fields.title),
            slug: Set(slug),
            category: Set(fields.category),
            description: Set(fields.description),
            issuing_organization: Set(fields.issuing_organization),
            achievement_date: Set(fields.achievement_date),
            expiration_date: Set(fields.expiration_date),
            no_expiration: Set(fields.no_expiration),
            icon_type: Set(fields.icon_type),
            icon_class: Set(fields.icon_class),
            icon_image: Set(fields.icon_image),
            credential_type: Set(fields.credential_type),
            credential_file: Set(fields.credential_file),
            credential_url: Set(fields.credential_url),
            is_active: Set(fields.is_active),
            is_draft: Set(fields.is_draft),
            order: Set(fields.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_slug_error)?;
        Ok(model_to_result(inserted))
    }

    async fn get(
        &self,
        achievement_id: Uuid,
    ) -> Result<AchievementResult, AchievementRepositoryError> {
        self.find_existing(achievement_id).await.map(model_to_result)
    }

    async fn list(
        &self,
        filter: AchievementListFilter,
    ) -> Result<Vec<AchievementResult>, AchievementRepositoryError> {
        let mut query = Entity::find()
            .order_by_desc(Column::AchievementDate)
            .order_by_asc(Column::Title);

        if filter == AchievementListFilter::Draft {
            query = query.filter(Column::IsDraft.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn recent(
        &self,
        limit: u64,
    ) -> Result<Vec<AchievementResult>, AchievementRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn counts(&self) -> Result<AchievementCounts, AchievementRepositoryError> {
        let total = Entity::find().count(&*self.db).await.map_err(map_db_err)?;
        let draft = Entity::find()
            .filter(Column::IsDraft.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(AchievementCounts { total, draft })
    }

    async fn update(
        &self,
        achievement_id: Uuid,
        fields: AchievementFields,
    ) -> Result<AchievementResult, AchievementRepositoryError> {
        let existing = self.find_existing(achievement_id).await?;
        let old_icon = existing.icon_image.clone();
        let old_credential = existing.credential_file.clone();

        let model = ActiveModel {
            id: Set(achievement_id),
            title: Set(fields.title),
            slug: match &fields.slug {
                Some(explicit) => Set(explicit.clone()),
                None => Set(existing.slug.clone()),
            },
            category: Set(fields.category),
            description: Set(fields.description),
            issuing_organization: Set(fields.issuing_organization),
            achievement_date: Set(fields.achievement_date),
            expiration_date: Set(fields.expiration_date),
            no_expiration: Set(fields.no_expiration),
            icon_type: Set(fields.icon_type),
            icon_class: Set(fields.icon_class),
            // Absent uploads keep the stored files.
            icon_image: match &fields.icon_image {
                Some(new_ref) => Set(Some(new_ref.clone())),
                None => Set(old_icon.clone()),
            },
            credential_type: Set(fields.credential_type),
            credential_file: match &fields.credential_file {
                Some(new_ref) => Set(Some(new_ref.clone())),
                None => Set(old_credential.clone()),
            },
            credential_url: Set(fields.credential_url),
            is_active: Set(fields.is_active),
            is_draft: Set(fields.is_draft),
            order: Set(fields.order),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_slug_error)?;

        for (new_ref, old_ref) in [
            (&fields.icon_image, &old_icon),
            (&fields.credential_file, &old_credential),
        ] {
            if let (Some(new_ref), Some(old_ref)) = (new_ref, old_ref) {
                if new_ref != old_ref {
                    discard_blobs(self.files.as_ref(), std::slice::from_ref(old_ref)).await;
                }
            }
        }

        Ok(model_to_result(updated))
    }

    async fn set_active(
        &self,
        achievement_id: Uuid,
        active: bool,
    ) -> Result<(), AchievementRepositoryError> {
        manage::set_active::<AchievementManaged, _>(&*self.db, achievement_id, active)
            .await
            .map_err(|e| match e {
                ToggleError::NotFound => AchievementRepositoryError::NotFound,
                ToggleError::DatabaseError(msg) => AchievementRepositoryError::DatabaseError(msg),
            })
    }

    async fn delete(
        &self,
        achievement_id: Uuid,
    ) -> Result<DeletedAchievement, AchievementRepositoryError> {
        let existing = self.find_existing(achievement_id).await?;

        let blob_refs: Vec<String> = [&existing.icon_image, &existing.credential_file]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        Entity::delete_by_id(achievement_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        discard_blobs(self.files.as_ref(), &blob_refs).await;

        Ok(DeletedAchievement {
            title: existing.title,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: achievements::Model) -> AchievementResult {
    AchievementResult {
        id: model.id,
        title: model.title,
        slug: model.slug,
        category: model.category,
        description: model.description,
        issuing_organization: model.issuing_organization,
        achievement_date: model.achievement_date,
        expiration_date: model.expiration_date,
        no_expiration: model.no_expiration,
        icon_type: model.icon_type,
        icon_class: model.icon_class,
        icon_image: model.icon_image,
        credential_type: model.credential_type,
        credential_file: model.credential_file,
        credential_url: model.credential_url,
        is_active: model.is_active,
        is_draft: model.is_draft,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_slug_error(e: DbErr) -> AchievementRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        AchievementRepositoryError::SlugAlreadyExists
    } else {
        AchievementRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> AchievementRepositoryError {
    AchievementRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
