pub mod about;
pub mod contact_form;
pub mod contact_info;
pub mod faq;
pub mod feature;
pub mod hero;
pub mod media;
pub mod navigation;
pub mod portfolio;
pub mod service;
pub mod service_category;
pub mod stat;
pub mod team;
pub mod testimonial;

use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Serialize a response body for storage in the response cache.
pub(crate) fn to_cached<T: Serialize>(body: &T) -> AppResult<Value> {
    serde_json::to_value(body).map_err(|e| AppError::InternalError(e.to_string()))
}
