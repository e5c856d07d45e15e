//! Headline statistics ("150+ Projects Completed").

use pixelbox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `stats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stat {
    pub id: DbId,
    pub title: String,
    pub number: i64,
    pub suffix: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStat {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(range(min = 0))]
    pub number: i64,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub suffix: String,
    #[serde(default, rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStat {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(range(min = 0))]
    pub number: Option<i64>,
    #[validate(length(max = 10))]
    pub suffix: Option<String>,
    #[serde(rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
}
