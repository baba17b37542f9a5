// src/modules/project/form.rs

use serde::Deserialize;

use super::ports::ProjectFields;
use super::sea_orm_entity::projects::ProjectStatus;
use crate::shared::attachments::NewAttachment;
use crate::shared::validation::{
    bounded_i32, optional, optional_date, optional_url, require, FieldErrors,
};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenshotUpload {
    pub image: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default = "default_status")]
    pub status: ProjectStatus,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub demo_url: String,
    #[serde(default)]
    pub other_url: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub screenshots: Vec<ScreenshotUpload>,
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Draft
}

fn default_true() -> bool {
    true
}

/// A validated submission: the fields plus the uploads for the screenshot
/// slot (empty when the request carried none).
#[derive(Debug, Clone)]
pub struct ProjectSubmission {
    pub fields: ProjectFields,
    pub screenshots: Vec<NewAttachment>,
}

impl ProjectForm {
    pub fn validate(self) -> Result<ProjectSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = require(&mut errors, "title", &self.title);
        let description = require(&mut errors, "description", &self.description);
        let technologies = require(&mut errors, "technologies", &self.technologies);

        let github_url = optional_url(&mut errors, "github_url", &self.github_url);
        let live_url = optional_url(&mut errors, "live_url", &self.live_url);
        let demo_url = optional_url(&mut errors, "demo_url", &self.demo_url);
        let other_url = optional_url(&mut errors, "other_url", &self.other_url);

        let start_date = optional_date(&mut errors, "start_date", &self.start_date);
        let end_date = optional_date(&mut errors, "end_date", &self.end_date);

        let order = self
            .order
            .map(|o| bounded_i32(&mut errors, "order", o, 0, i32::MAX))
            .unwrap_or(Some(0))
            .unwrap_or(0);

        let screenshots = self
            .screenshots
            .iter()
            .map(|s| NewAttachment {
                image: s.image.clone(),
                caption: s.caption.trim().to_string(),
            })
            .collect();

        errors.into_result(ProjectSubmission {
            fields: ProjectFields {
                title,
                project_name: optional(&self.project_name),
                description,
                documentation: optional(&self.documentation),
                category_id: self.category_id,
                technologies,
                github_url,
                live_url,
                demo_url,
                other_url,
                thumbnail: self.thumbnail.as_deref().and_then(optional),
                start_date,
                end_date,
                client: optional(&self.client),
                status: self.status,
                is_active: self.is_active,
                is_featured: self.is_featured,
                is_draft: self.is_draft,
                order,
            },
            screenshots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> ProjectForm {
        ProjectForm {
            title: "Portfolio Site".to_string(),
            project_name: String::new(),
            category_id: None,
            description: "A personal portfolio site.".to_string(),
            documentation: String::new(),
            technologies: "Rust, Actix, PostgreSQL".to_string(),
            status: ProjectStatus::Active,
            is_active: true,
            is_featured: false,
            is_draft: false,
            github_url: String::new(),
            live_url: String::new(),
            demo_url: String::new(),
            other_url: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            client: String::new(),
            thumbnail: None,
            order: None,
            screenshots: vec![],
        }
    }

    #[test]
    fn valid_form_defaults_order_to_zero() {
        let submission = base_form().validate().unwrap();
        assert_eq!(submission.fields.order, 0);
        assert!(submission.screenshots.is_empty());
    }

    #[test]
    fn required_fields_are_collected_together() {
        let mut form = base_form();
        form.title = String::new();
        form.description = String::new();
        form.technologies = " ".to_string();

        let errors = form.validate().unwrap_err();
        assert!(!errors.messages("title").is_empty());
        assert!(!errors.messages("description").is_empty());
        assert!(!errors.messages("technologies").is_empty());
    }

    #[test]
    fn malformed_url_is_a_field_error() {
        let mut form = base_form();
        form.github_url = "github.com/x/y".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.messages("github_url"), &["Enter a valid URL.".to_string()]);
    }

    #[test]
    fn screenshots_keep_submission_order() {
        let mut form = base_form();
        form.screenshots = vec![
            ScreenshotUpload {
                image: "first.png".to_string(),
                caption: "Home".to_string(),
            },
            ScreenshotUpload {
                image: "second.png".to_string(),
                caption: String::new(),
            },
        ];

        let submission = form.validate().unwrap();
        assert_eq!(submission.screenshots[0].image, "first.png");
        assert_eq!(submission.screenshots[1].image, "second.png");
    }

    #[test]
    fn negative_order_is_rejected() {
        let mut form = base_form();
        form.order = Some(-5);

        let errors = form.validate().unwrap_err();
        assert!(!errors.messages("order").is_empty());
    }
}
