//! Portfolio project and gallery image models and DTOs.
//!
//! Slugs are assigned by the repository on first insert and are absent from
//! both DTOs: clients can neither choose nor change them.

use pixelbox_core::content::MEDIA_TYPE_IMAGE;
use pixelbox_core::media::MediaRef;
use pixelbox_core::serde_helpers::nullable;
use pixelbox_core::types::{DbId, Timestamp};
use pixelbox_core::validation::{
    validate_media, validate_media_type, validate_optional_url, validate_string_list,
};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// A row from `portfolio_projects` joined with the linked service's title.
///
/// `slug` is only `None` for rows inserted outside the API that have not been
/// through the slug backfill yet.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioProject {
    pub id: DbId,
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub detailed_description: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    pub media: Json<MediaRef>,
    pub media_type: String,
    pub tags: Vec<String>,
    pub service_id: Option<DbId>,
    pub service_name: Option<String>,
    pub client: String,
    pub project_url: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_media_type() -> String {
    MEDIA_TYPE_IMAGE.to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortfolioProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub results: String,
    #[serde(default)]
    #[validate(custom(function = "validate_media"))]
    pub media: MediaRef,
    #[serde(default = "default_media_type")]
    #[validate(custom(function = "validate_media_type"))]
    pub media_type: String,
    #[serde(default)]
    #[validate(custom(function = "validate_string_list"))]
    pub tags: Vec<String>,
    pub service_id: Option<DbId>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub client: String,
    #[serde(default)]
    #[validate(length(max = 500), custom(function = "validate_optional_url"))]
    pub project_url: String,
    #[serde(default, rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: i32,
    #[serde(default)]
    pub is_featured: bool,
}

/// DTO for updating a project. Editing the title never touches the slug.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePortfolioProject {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub results: Option<String>,
    #[validate(custom(function = "validate_media"))]
    pub media: Option<MediaRef>,
    #[validate(custom(function = "validate_media_type"))]
    pub media_type: Option<String>,
    #[validate(custom(function = "validate_string_list"))]
    pub tags: Option<Vec<String>>,
    /// `null` unlinks the project from its service.
    #[serde(default, deserialize_with = "nullable")]
    pub service_id: Option<Option<DbId>>,
    #[validate(length(max = 100))]
    pub client: Option<String>,
    #[validate(length(max = 500), custom(function = "validate_optional_url"))]
    pub project_url: Option<String>,
    #[serde(rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
    pub is_featured: Option<bool>,
}

/// Outcome of assigning a slug to a project that had none.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct AssignedSlug {
    pub project_id: DbId,
    pub title: String,
    pub slug: String,
}

// ---------------------------------------------------------------------------
// Gallery images
// ---------------------------------------------------------------------------

/// A row from the `portfolio_gallery_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioGalleryImage {
    pub id: DbId,
    pub project_id: DbId,
    pub image: Json<MediaRef>,
    pub caption: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGalleryImage {
    #[validate(custom(function = "validate_media"))]
    pub image: MediaRef,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub caption: String,
    #[serde(default, rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGalleryImage {
    #[validate(custom(function = "validate_media"))]
    pub image: Option<MediaRef>,
    #[validate(length(max = 200))]
    pub caption: Option<String>,
    #[serde(rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
}
