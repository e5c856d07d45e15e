//! Frequently asked questions.

use pixelbox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFaq {
    #[validate(length(min = 1, max = 500))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    #[serde(default, rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: i32,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFaq {
    #[validate(length(min = 1, max = 500))]
    pub question: Option<String>,
    #[validate(length(min = 1))]
    pub answer: Option<String>,
    #[serde(rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
    pub is_featured: Option<bool>,
}
