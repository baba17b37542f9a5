// src/modules/public_api/routes/categories.rs

use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::public_api::ports::PublicQueryError;
use crate::shared::api::{ApiKey, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CategoryListQuery {
    /// Category type value, e.g. "project".
    #[serde(default, rename = "type")]
    pub category_type: Option<String>,
}

#[get("/api/categories/")]
pub async fn list_public_categories_handler(
    _key: ApiKey,
    query: web::Query<CategoryListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .public_query
        .list_categories(query.category_type.clone())
        .await
    {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => {
            error!("Query error listing public categories: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/categories/{slug}/")]
pub async fn get_public_category_handler(
    _key: ApiKey,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.public_query.category_by_slug(&path.into_inner()).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(PublicQueryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(e) => {
            error!("Query error fetching public category: {}", e);
            ApiResponse::internal_error()
        }
    }
}
