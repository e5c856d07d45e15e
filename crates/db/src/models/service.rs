//! Service category and service item models and DTOs.

use pixelbox_core::types::{DbId, Timestamp};
use pixelbox_core::validation::validate_string_list;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// A row from the `service_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// List projection of a category with the number of services it holds.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceCategorySummary {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub services_count: i64,
}

/// DTO for creating a service category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub icon: String,
    #[serde(default, rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: i32,
}

/// DTO for updating a service category. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateServiceCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub icon: Option<String>,
    #[serde(rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
}

// ---------------------------------------------------------------------------
// Service items
// ---------------------------------------------------------------------------

/// A row from the `service_items` table joined with its category name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceItem {
    pub id: DbId,
    pub category_id: DbId,
    pub category_name: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub icon: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceItem {
    pub category_id: DbId,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "validate_string_list"))]
    pub features: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub icon: String,
    #[serde(default, rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: i32,
    #[serde(default)]
    pub is_featured: bool,
}

/// DTO for updating a service item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateServiceItem {
    pub category_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_string_list"))]
    pub features: Option<Vec<String>>,
    #[validate(length(max = 50))]
    pub icon: Option<String>,
    #[serde(rename = "order")]
    #[validate(range(min = 0))]
    pub sort_order: Option<i32>,
    pub is_featured: Option<bool>,
}
