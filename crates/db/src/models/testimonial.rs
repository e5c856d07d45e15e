//! Client testimonials.

use pixelbox_core::content::DEFAULT_RATING;
use pixelbox_core::media::MediaRef;
use pixelbox_core::types::{DbId, Timestamp};
use pixelbox_core::validation::validate_media;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub company: String,
    pub review: String,
    pub photo: Json<MediaRef>,
    pub rating: i16,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_rating() -> i16 {
    DEFAULT_RATING
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub role: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub company: String,
    #[validate(length(min = 1))]
    pub review: String,
    #[serde(default)]
    #[validate(custom(function = "validate_media"))]
    pub photo: MediaRef,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
    #[serde(default, rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: i32,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub role: Option<String>,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    #[validate(length(min = 1))]
    pub review: Option<String>,
    #[validate(custom(function = "validate_media"))]
    pub photo: Option<MediaRef>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i16>,
    #[serde(rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
    pub is_featured: Option<bool>,
}
