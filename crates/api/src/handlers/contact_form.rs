//! Handlers for the `/contact-form` resource.
//!
//! Visitors submit messages; editors list, triage and delete them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::contact::{
    ContactFormSubmission, CreateContactFormSubmission, UpdateContactFormSubmission,
};
use pixelbox_db::repositories::ContactFormRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::AckResponse;
use crate::state::AppState;

/// Confirmation returned to the visitor after a successful submission.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ContactFormSubmission",
        id,
    })
}

/// POST /api/v1/contact-form
///
/// Stores the submission (always unread) and returns it with a thank-you
/// message.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateContactFormSubmission>,
) -> AppResult<(StatusCode, Json<AckResponse<ContactFormSubmission>>)> {
    input.validate()?;
    let submission = ContactFormRepo::create(&state.pool, &input).await?;
    tracing::info!(
        submission_id = submission.id,
        email = %submission.email,
        "Contact form submitted",
    );
    Ok((
        StatusCode::CREATED,
        Json(AckResponse {
            message: THANK_YOU_MESSAGE,
            data: submission,
        }),
    ))
}

/// GET /api/v1/contact-form
///
/// All submissions, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ContactFormSubmission>>> {
    let rows = ContactFormRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/contact-form/unread
pub async fn list_unread(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactFormSubmission>>> {
    let rows = ContactFormRepo::list_unread(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/contact-form/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactFormSubmission>> {
    let submission = ContactFormRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(submission))
}

/// PATCH /api/v1/contact-form/{id}/mark_read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactFormSubmission>> {
    let submission = ContactFormRepo::mark_read(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(submission_id = id, "Contact form submission marked read");
    Ok(Json(submission))
}

/// PUT|PATCH /api/v1/contact-form/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateContactFormSubmission>,
) -> AppResult<Json<ContactFormSubmission>> {
    input.validate()?;
    let submission = ContactFormRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(submission_id = id, "Contact form submission updated");
    Ok(Json(submission))
}

/// DELETE /api/v1/contact-form/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ContactFormRepo::delete(&state.pool, id).await? {
        tracing::info!(submission_id = id, "Contact form submission deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
