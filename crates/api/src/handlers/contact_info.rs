//! Handlers for the `/contact-info` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::contact::{ContactInfo, CreateContactInfo, UpdateContactInfo};
use pixelbox_db::repositories::ContactInfoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ContactInfo",
        id,
    })
}

/// POST /api/v1/contact-info
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateContactInfo>,
) -> AppResult<(StatusCode, Json<ContactInfo>)> {
    input.validate()?;
    let info = ContactInfoRepo::create(&state.pool, &input).await?;
    tracing::info!(contact_info_id = info.id, "Contact info created");
    Ok((StatusCode::CREATED, Json(info)))
}

/// GET /api/v1/contact-info
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ContactInfo>>> {
    let rows = ContactInfoRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/contact-info/current
pub async fn current(State(state): State<AppState>) -> AppResult<Json<ContactInfo>> {
    let info = ContactInfoRepo::current(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::Unset {
            what: "contact info",
        }))?;
    Ok(Json(info))
}

/// GET /api/v1/contact-info/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactInfo>> {
    let info = ContactInfoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(info))
}

/// PUT|PATCH /api/v1/contact-info/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateContactInfo>,
) -> AppResult<Json<ContactInfo>> {
    input.validate()?;
    let info = ContactInfoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(contact_info_id = id, "Contact info updated");
    Ok(Json(info))
}

/// DELETE /api/v1/contact-info/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ContactInfoRepo::delete(&state.pool, id).await? {
        tracing::info!(contact_info_id = id, "Contact info deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
