// src/modules/project/routes/list_projects.rs

use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::modules::project::ports::ProjectListFilter;
use crate::shared::api::MgmtResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

impl ListQuery {
    /// Unknown filter values fall back to the full listing.
    fn filter(&self) -> ProjectListFilter {
        match self.filter.as_deref() {
            Some("draft") => ProjectListFilter::Draft,
            _ => ProjectListFilter::All,
        }
    }
}

#[get("/projects/list/")]
pub async fn list_projects_handler(
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = query.filter();

    let projects = match data.projects.list(filter).await {
        Ok(projects) => projects,
        Err(e) => {
            error!("Repository error listing projects: {}", e);
            return MgmtResponse::internal_error();
        }
    };

    match data.projects.counts().await {
        Ok(counts) => HttpResponse::Ok().json(json!({
            "projects": projects,
            "current_filter": match filter {
                ProjectListFilter::Draft => "draft",
                ProjectListFilter::All => "all",
            },
            "total_count": counts.total,
            "draft_count": counts.draft,
        })),
        Err(e) => {
            error!("Repository error counting projects: {}", e);
            MgmtResponse::internal_error()
        }
    }
}
