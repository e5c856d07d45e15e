//! Contact information (singleton) and contact-form submission models.

use pixelbox_core::content::{BusinessHours, SocialLinks};
use pixelbox_core::types::{DbId, Timestamp};
use pixelbox_core::validation::validate_social_links;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Contact information
// ---------------------------------------------------------------------------

/// The row from the `contact_info` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactInfo {
    pub id: DbId,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub social_links: Json<SocialLinks>,
    pub business_hours: Json<BusinessHours>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the contact information record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactInfo {
    #[validate(length(min = 1, max = 20))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[serde(default)]
    #[validate(custom(function = "validate_social_links"))]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub business_hours: BusinessHours,
}

/// DTO for updating the contact information record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContactInfo {
    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    #[validate(custom(function = "validate_social_links"))]
    pub social_links: Option<SocialLinks>,
    pub business_hours: Option<BusinessHours>,
}

// ---------------------------------------------------------------------------
// Contact form submissions
// ---------------------------------------------------------------------------

/// The row from the `contact_form_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactFormSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub submitted_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a visitor submitting the contact form.
///
/// `is_read` and `submitted_at` are server-assigned and not accepted here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactFormSubmission {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 254))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub company: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// DTO for an editor amending a submission. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContactFormSubmission {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email, length(max = 254))]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub message: Option<String>,
    pub is_read: Option<bool>,
}
