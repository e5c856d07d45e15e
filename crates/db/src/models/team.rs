//! Team member profiles.

use pixelbox_core::content::SocialLinks;
use pixelbox_core::media::MediaRef;
use pixelbox_core::types::{DbId, Timestamp};
use pixelbox_core::validation::{validate_media, validate_social_links};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: Json<MediaRef>,
    pub social_links: Json<SocialLinks>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamMember {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub role: String,
    #[validate(length(min = 1))]
    pub bio: String,
    #[serde(default)]
    #[validate(custom(function = "validate_media"))]
    pub image: MediaRef,
    #[serde(default)]
    #[validate(custom(function = "validate_social_links"))]
    pub social_links: SocialLinks,
    #[serde(default, rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: i32,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTeamMember {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub role: Option<String>,
    #[validate(length(min = 1))]
    pub bio: Option<String>,
    #[validate(custom(function = "validate_media"))]
    pub image: Option<MediaRef>,
    #[validate(custom(function = "validate_social_links"))]
    pub social_links: Option<SocialLinks>,
    #[serde(rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
    pub is_featured: Option<bool>,
}
