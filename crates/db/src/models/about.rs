//! About section (singleton) model and DTOs.

use pixelbox_core::types::{DbId, Timestamp};
use pixelbox_core::validation::validate_string_list;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// The row from the `about_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutContent {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub story: String,
    pub vision: String,
    pub mission: String,
    #[serde(rename = "values")]
    pub company_values: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the about content.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAboutContent {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub story: String,
    #[validate(length(min = 1))]
    pub vision: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default, rename = "values")]
    #[validate(custom(function = "validate_string_list"))]
    pub company_values: Vec<String>,
}

/// DTO for updating the about content. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAboutContent {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub story: Option<String>,
    #[validate(length(min = 1))]
    pub vision: Option<String>,
    pub mission: Option<String>,
    #[serde(rename = "values")]
    #[validate(custom(function = "validate_string_list"))]
    pub company_values: Option<Vec<String>>,
}
