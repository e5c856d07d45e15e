//! Handlers for the `/features` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::feature::{CreateFeature, Feature, UpdateFeature};
use pixelbox_db::repositories::FeatureRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Feature",
        id,
    })
}

/// POST /api/v1/features
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFeature>,
) -> AppResult<(StatusCode, Json<Feature>)> {
    input.validate()?;
    let feature = FeatureRepo::create(&state.pool, &input).await?;
    tracing::info!(feature_id = feature.id, title = %feature.title, "Feature created");
    Ok((StatusCode::CREATED, Json(feature)))
}

/// GET /api/v1/features
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Feature>>> {
    let rows = FeatureRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/features/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Feature>> {
    let feature = FeatureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(feature))
}

/// PUT|PATCH /api/v1/features/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateFeature>,
) -> AppResult<Json<Feature>> {
    input.validate()?;
    let feature = FeatureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(feature_id = id, "Feature updated");
    Ok(Json(feature))
}

/// DELETE /api/v1/features/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FeatureRepo::delete(&state.pool, id).await? {
        tracing::info!(feature_id = id, "Feature deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
