// src/modules/experience/form.rs

use serde::Deserialize;

use super::ports::ExperienceFields;
use super::sea_orm_entity::experiences::{EmploymentStatus, EmploymentType};
use crate::shared::attachments::NewAttachment;
use crate::shared::validation::{
    bounded_i32, normalize_month, optional, optional_date, require, required_date, FieldErrors,
};

#[derive(Debug, Clone, Deserialize)]
pub struct WorkplaceImageUpload {
    pub image: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceForm {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_employment_type")]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub employment_status: Option<EmploymentStatus>,
    /// `YYYY-MM-DD`, or `YYYY-MM` from a month picker.
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub currently_working: bool,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub workplace_images: Vec<WorkplaceImageUpload>,
}

fn default_employment_type() -> EmploymentType {
    EmploymentType::FullTime
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct ExperienceSubmission {
    pub fields: ExperienceFields,
    pub images: Vec<NewAttachment>,
}

impl ExperienceForm {
    pub fn validate(self) -> Result<ExperienceSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let position = require(&mut errors, "position", &self.position);
        let company_name = require(&mut errors, "company_name", &self.company_name);
        let short_description = require(&mut errors, "short_description", &self.short_description);
        let detailed_description =
            require(&mut errors, "detailed_description", &self.detailed_description);

        // Month pickers submit YYYY-MM; expand before parsing.
        let start_date = required_date(
            &mut errors,
            "start_date",
            &normalize_month(&self.start_date),
        );
        let end_date = optional_date(&mut errors, "end_date", &normalize_month(&self.end_date));

        // An ongoing position has no end date, whatever was submitted.
        let end_date = if self.currently_working { None } else { end_date };

        let employment_status = self.employment_status.unwrap_or(if self.currently_working {
            EmploymentStatus::Current
        } else {
            EmploymentStatus::Past
        });

        let order = self
            .order
            .map(|o| bounded_i32(&mut errors, "order", o, 0, i32::MAX))
            .unwrap_or(Some(0))
            .unwrap_or(0);

        let images = self
            .workplace_images
            .iter()
            .map(|i| NewAttachment {
                image: i.image.clone(),
                caption: i.caption.trim().to_string(),
            })
            .collect();

        let start_date = match start_date {
            Some(date) => date,
            None => return Err(errors),
        };

        errors.into_result(ExperienceSubmission {
            fields: ExperienceFields {
                position,
                company_name,
                company_logo: self.company_logo.as_deref().and_then(optional),
                location: optional(&self.location),
                employment_type: self.employment_type,
                employment_status,
                start_date,
                end_date,
                currently_working: self.currently_working,
                short_description,
                detailed_description,
                is_active: self.is_active,
                is_draft: self.is_draft,
                order,
            },
            images,
        })
    }
}
