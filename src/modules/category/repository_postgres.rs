// src/modules/category/repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::ports::{CategoryFields, CategoryRepository, CategoryRepositoryError, CategoryResult};
use super::sea_orm_entity::{self as categories, ActiveModel, CategoryType, Column, Entity};
use crate::modules::project::sea_orm_entity::projects;
use crate::modules::skill::sea_orm_entity as skills;
use crate::shared::slug::{candidate, slugify};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn free_slug(&self, display: &str) -> Result<String, CategoryRepositoryError> {
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

    /// Count of rows referencing this category. Only projects and skills
    /// carry a category relation; the other types always count 0.
    async fn item_count(&self, model: &categories::Model) -> Result<u64, CategoryRepositoryError> {
        match model.category_type {
            CategoryType::Project => projects::Entity::find()
                .filter(projects::Column::CategoryId.eq(model.id))
                .count(&*self.db)
                .await
                .map_err(map_db_err),
            CategoryType::Skill => skills::Entity::find()
                .filter(skills::Column::CategoryId.eq(model.id))
                .count(&*self.db)
                .await
                .map_err(map_db_err),
            CategoryType::Achievement | CategoryType::Experience => Ok(0),
        }
    }

    async fn find_existing(
        &self,
        category_id: Uuid,
    ) -> Result<categories::Model, CategoryRepositoryError> {
        Entity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CategoryRepositoryError::NotFound)
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create(
        &self,
        fields: CategoryFields,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        let slug = match &fields.slug {
            Some(explicit) => explicit.clone(),
            None => self.free_slug(&fields.name).await?,
        };

        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(fields.name),
            slug: Set(slug),
            category_type: Set(fields.category_type),
            description: Set(fields.description),
            icon: Set(fields.icon),
            color: Set(fields.color),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_slug_error)?;

        // A fresh category cannot have items yet.
        Ok(model_to_result(inserted, 0))
    }

    async fn get(&self, category_id: Uuid) -> Result<CategoryResult, CategoryRepositoryError> {
        let model = self.find_existing(category_id).await?;
        let count = self.item_count(&model).await?;
        Ok(model_to_result(model, count))
    }

    async fn list(
        &self,
        category_type: Option<CategoryType>,
    ) -> Result<Vec<CategoryResult>, CategoryRepositoryError> {
        let mut query = Entity::find()
            .order_by_asc(Column::CategoryType)
            .order_by_asc(Column::Name);

        if let Some(ty) = category_type {
            query = query.filter(Column::CategoryType.eq(ty));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            let count = self.item_count(&model).await?;
            results.push(model_to_result(model, count));
        }

        Ok(results)
    }

    async fn update(
        &self,
        category_id: Uuid,
        fields: CategoryFields,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        let existing = self.find_existing(category_id).await?;

        let model = ActiveModel {
            id: Set(category_id),
            name: Set(fields.name),
            // Absent slug keeps the stored one; derivation happens at create.
            slug: match &fields.slug {
                Some(explicit) => Set(explicit.clone()),
                None => Set(existing.slug.clone()),
            },
            category_type: Set(fields.category_type),
            description: Set(fields.description),
            icon: Set(fields.icon),
            color: Set(fields.color),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_slug_error)?;
        let count = self.item_count(&updated).await?;

        Ok(model_to_result(updated, count))
    }

    async fn delete(&self, category_id: Uuid) -> Result<String, CategoryRepositoryError> {
        let existing = self.find_existing(category_id).await?;
        let name = existing.name.clone();

        Entity::delete_by_id(category_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(name)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: categories::Model, item_count: u64) -> CategoryResult {
    CategoryResult {
        id: model.id,
        name: model.name,
        slug: model.slug,
        category_type: model.category_type,
        category_type_display: model.category_type.display().to_string(),
        description: model.description,
        icon: model.icon,
        color: model.color,
        item_count,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_slug_error(e: DbErr) -> CategoryRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        CategoryRepositoryError::SlugAlreadyExists
    } else {
        CategoryRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> CategoryRepositoryError {
    CategoryRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
