// src/modules/category/form.rs

use serde::Deserialize;

use super::ports::CategoryFields;
use super::sea_orm_entity::CategoryType;
use crate::shared::slug::slugify;
use crate::shared::validation::{optional, require, FieldErrors};

const DEFAULT_ICON: &str = "fas fa-folder";
const DEFAULT_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub category_type: CategoryType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl CategoryForm {
    pub fn validate(self) -> Result<CategoryFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = require(&mut errors, "name", &self.name);

        let slug = match optional(&self.slug) {
            Some(explicit) => {
                let normalized = explicit.to_lowercase();
                if slugify(&normalized) != normalized {
                    errors.add(
                        "slug",
                        "Enter a valid slug consisting of letters, numbers and hyphens.",
                    );
                }
                Some(normalized)
            }
            None => None,
        };

        let icon = optional(&self.icon).unwrap_or_else(|| DEFAULT_ICON.to_string());
        let color = optional(&self.color).unwrap_or_else(|| DEFAULT_COLOR.to_string());

        errors.into_result(CategoryFields {
            name,
            slug,
            category_type: self.category_type,
            description: optional(&self.description),
            icon,
            color,
        })
    }
}
