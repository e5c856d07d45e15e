//! Request extractors with error bodies in the API's JSON shape.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections become [`AppError`]s.
///
/// A body that parses but does not fit the DTO (missing field, wrong type)
/// is reported as a 400 validation failure naming the field.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
