//! Hero banner (singleton) model and DTOs.
//!
//! The hero carries five independent media slots: landscape and portrait
//! video, landscape and portrait image, and a logo.

use pixelbox_core::media::MediaRef;
use pixelbox_core::types::{DbId, Timestamp};
use pixelbox_core::validation::{validate_href, validate_media};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// The row from the `hero` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hero {
    pub id: DbId,
    pub video: Json<MediaRef>,
    pub video_portrait: Json<MediaRef>,
    pub image: Json<MediaRef>,
    pub image_portrait: Json<MediaRef>,
    pub logo: Json<MediaRef>,
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the hero record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHero {
    #[serde(default)]
    #[validate(custom(function = "validate_media"))]
    pub video: MediaRef,
    #[serde(default)]
    #[validate(custom(function = "validate_media"))]
    pub video_portrait: MediaRef,
    #[serde(default)]
    #[validate(custom(function = "validate_media"))]
    pub image: MediaRef,
    #[serde(default)]
    #[validate(custom(function = "validate_media"))]
    pub image_portrait: MediaRef,
    #[serde(default)]
    #[validate(custom(function = "validate_media"))]
    pub logo: MediaRef,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub subtitle: String,
    #[validate(length(min = 1, max = 100))]
    pub cta_text: String,
    #[validate(length(max = 500), custom(function = "validate_href"))]
    pub cta_link: String,
}

/// DTO for updating the hero record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHero {
    #[validate(custom(function = "validate_media"))]
    pub video: Option<MediaRef>,
    #[validate(custom(function = "validate_media"))]
    pub video_portrait: Option<MediaRef>,
    #[validate(custom(function = "validate_media"))]
    pub image: Option<MediaRef>,
    #[validate(custom(function = "validate_media"))]
    pub image_portrait: Option<MediaRef>,
    #[validate(custom(function = "validate_media"))]
    pub logo: Option<MediaRef>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub subtitle: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub cta_text: Option<String>,
    #[validate(length(max = 500), custom(function = "validate_href"))]
    pub cta_link: Option<String>,
}
