// src/modules/category/routes.rs

use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::form::CategoryForm;
use super::ports::CategoryRepositoryError;
use crate::shared::api::MgmtResponse;
use crate::shared::validation::FieldErrors;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

/// The category manage page drives everything through one endpoint with an
/// action discriminator.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CategoryAction {
    Create {
        #[serde(flatten)]
        form: CategoryForm,
    },
    Update {
        category_id: Uuid,
        #[serde(flatten)]
        form: CategoryForm,
    },
    Delete {
        category_id: Uuid,
    },
    Get {
        category_id: Uuid,
    },
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/categories/")]
pub async fn manage_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.categories.list(None).await {
        Ok(categories) => {
            let total_count = categories.len();
            actix_web::HttpResponse::Ok().json(json!({
                "categories": categories,
                "total_count": total_count,
            }))
        }
        Err(e) => {
            error!("Repository error listing categories: {}", e);
            MgmtResponse::internal_error()
        }
    }
}

#[post("/categories/")]
pub async fn category_action_handler(
    req: web::Json<CategoryAction>,
    data: web::Data<AppState>,
) -> impl Responder {
    match req.into_inner() {
        CategoryAction::Create { form } => {
            let fields = match form.validate() {
                Ok(fields) => fields,
                Err(errors) => return MgmtResponse::invalid(&errors),
            };

            match data.categories.create(fields).await {
                Ok(category) => MgmtResponse::ok_with(
                    "Category created successfully!",
                    "category",
                    category,
                ),
                Err(CategoryRepositoryError::SlugAlreadyExists) => {
                    MgmtResponse::invalid(&slug_conflict())
                }
                Err(e) => {
                    error!("Repository error creating category: {}", e);
                    MgmtResponse::internal_error()
                }
            }
        }

        CategoryAction::Update { category_id, form } => {
            let fields = match form.validate() {
                Ok(fields) => fields,
                Err(errors) => return MgmtResponse::invalid(&errors),
            };

            match data.categories.update(category_id, fields).await {
                Ok(category) => MgmtResponse::ok_with(
                    "Category updated successfully!",
                    "category",
                    category,
                ),
                Err(CategoryRepositoryError::NotFound) => {
                    MgmtResponse::not_found("Category not found.")
                }
                Err(CategoryRepositoryError::SlugAlreadyExists) => {
                    MgmtResponse::invalid(&slug_conflict())
                }
                Err(e) => {
                    error!("Repository error updating category: {}", e);
                    MgmtResponse::internal_error()
                }
            }
        }

        CategoryAction::Delete { category_id } => {
            match data.categories.delete(category_id).await {
                Ok(name) => MgmtResponse::ok(&format!("Category '{name}' deleted successfully!")),
                Err(CategoryRepositoryError::NotFound) => {
                    MgmtResponse::not_found("Category not found.")
                }
                Err(e) => {
                    error!("Repository error deleting category: {}", e);
                    MgmtResponse::internal_error()
                }
            }
        }

        CategoryAction::Get { category_id } => match data.categories.get(category_id).await {
            Ok(category) => actix_web::HttpResponse::Ok().json(json!({
                "success": true,
                "category": category,
            })),
            Err(CategoryRepositoryError::NotFound) => MgmtResponse::not_found("Category not found."),
            Err(e) => {
                error!("Repository error fetching category: {}", e);
                MgmtResponse::internal_error()
            }
        },
    }
}

fn slug_conflict() -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.add("slug", "Category with this slug already exists.");
    errors
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
