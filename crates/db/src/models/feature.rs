//! "Why choose us" feature tiles.

use pixelbox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feature {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeature {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 50))]
    pub icon: String,
    #[serde(default, rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeature {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub icon: Option<String>,
    #[serde(rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
}
