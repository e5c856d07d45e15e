//! Handlers for the `/stats` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::stat::{CreateStat, Stat, UpdateStat};
use pixelbox_db::repositories::StatRepo;
use serde_json::Value;
use validator::Validate;

use crate::cache::keys;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::to_cached;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Stat", id })
}

/// POST /api/v1/stats
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateStat>,
) -> AppResult<(StatusCode, Json<Stat>)> {
    input.validate()?;
    let stat = StatRepo::create(&state.pool, &input).await?;
    tracing::info!(stat_id = stat.id, title = %stat.title, number = stat.number, "Stat created");
    Ok((StatusCode::CREATED, Json(stat)))
}

/// GET /api/v1/stats
///
/// Ordered by `order`, cached for the configured TTL.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let pool = &state.pool;
    let body = state
        .cache
        .get_or_try_insert_with(keys::STATS_ALL, || async move {
            let rows = StatRepo::list(pool).await?;
            to_cached(&rows)
        })
        .await?;
    Ok(Json(body))
}

/// GET /api/v1/stats/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Stat>> {
    let stat = StatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(stat))
}

/// PUT|PATCH /api/v1/stats/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateStat>,
) -> AppResult<Json<Stat>> {
    input.validate()?;
    let stat = StatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(stat_id = id, "Stat updated");
    Ok(Json(stat))
}

/// DELETE /api/v1/stats/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if StatRepo::delete(&state.pool, id).await? {
        tracing::info!(stat_id = id, "Stat deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
