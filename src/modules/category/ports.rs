// src/modules/category/ports.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::sea_orm_entity::CategoryType;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CategoryFields {
    pub name: String,

    /// `None` derives the slug from `name` (with collision suffixing);
    /// an explicit slug that collides is an error.
    pub slug: Option<String>,

    pub category_type: CategoryType,
    pub description: Option<String>,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub category_type: CategoryType,
    pub category_type_display: String,
    pub description: Option<String>,
    pub icon: String,
    pub color: String,

    /// Derived, never stored: count of rows referencing this category.
    pub item_count: u64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category not found")]
    NotFound,

    /// Unique slug violated at INSERT/UPDATE time (global across types).
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, fields: CategoryFields)
        -> Result<CategoryResult, CategoryRepositoryError>;

    async fn get(&self, category_id: Uuid) -> Result<CategoryResult, CategoryRepositoryError>;

    /// Ordered `(category_type, name)`.
    async fn list(
        &self,
        category_type: Option<CategoryType>,
    ) -> Result<Vec<CategoryResult>, CategoryRepositoryError>;

    async fn update(
        &self,
        category_id: Uuid,
        fields: CategoryFields,
    ) -> Result<CategoryResult, CategoryRepositoryError>;

    /// Returns the deleted category's name for the success message.
    async fn delete(&self, category_id: Uuid) -> Result<String, CategoryRepositoryError>;
}
