//! Handlers for the `/about` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::about::{AboutContent, CreateAboutContent, UpdateAboutContent};
use pixelbox_db::repositories::AboutRepo;
use serde_json::Value;
use validator::Validate;

use crate::cache::keys;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::to_cached;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "AboutContent",
        id,
    })
}

/// POST /api/v1/about
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAboutContent>,
) -> AppResult<(StatusCode, Json<AboutContent>)> {
    input.validate()?;
    let about = AboutRepo::create(&state.pool, &input).await?;
    tracing::info!(about_id = about.id, title = %about.title, "About content created");
    Ok((StatusCode::CREATED, Json(about)))
}

/// GET /api/v1/about
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AboutContent>>> {
    let rows = AboutRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/about/current
///
/// Cached. A missing record is reported as 404 and never cached.
pub async fn current(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let pool = &state.pool;
    let body = state
        .cache
        .get_or_try_insert_with(keys::ABOUT_CURRENT, || async move {
            let about = AboutRepo::current(pool)
                .await?
                .ok_or(AppError::Core(CoreError::Unset {
                    what: "about content",
                }))?;
            to_cached(&about)
        })
        .await?;
    Ok(Json(body))
}

/// GET /api/v1/about/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AboutContent>> {
    let about = AboutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(about))
}

/// PUT|PATCH /api/v1/about/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateAboutContent>,
) -> AppResult<Json<AboutContent>> {
    input.validate()?;
    let about = AboutRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(about_id = id, "About content updated");
    Ok(Json(about))
}

/// DELETE /api/v1/about/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if AboutRepo::delete(&state.pool, id).await? {
        tracing::info!(about_id = id, "About content deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
