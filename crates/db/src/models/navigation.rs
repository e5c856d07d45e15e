//! Site navigation (singleton) model and DTOs.

use pixelbox_core::content::NavLink;
use pixelbox_core::media::MediaRef;
use pixelbox_core::types::{DbId, Timestamp};
use pixelbox_core::validation::{validate_media, validate_nav_links};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// The row from the `navigation` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Navigation {
    pub id: DbId,
    pub logo: Json<MediaRef>,
    pub menu_links: Json<Vec<NavLink>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the navigation record.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateNavigation {
    #[serde(default)]
    #[validate(custom(function = "validate_media"))]
    pub logo: MediaRef,
    #[serde(default)]
    #[validate(custom(function = "validate_nav_links"))]
    pub menu_links: Vec<NavLink>,
}

/// DTO for updating the navigation record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNavigation {
    #[validate(custom(function = "validate_media"))]
    pub logo: Option<MediaRef>,
    #[validate(custom(function = "validate_nav_links"))]
    pub menu_links: Option<Vec<NavLink>>,
}
