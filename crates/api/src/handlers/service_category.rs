//! Handlers for the `/service-categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::service::{
    CreateServiceCategory, ServiceCategory, ServiceCategorySummary, ServiceItem,
    UpdateServiceCategory,
};
use pixelbox_db::repositories::{ServiceCategoryRepo, ServiceItemRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ServiceCategory",
        id,
    })
}

/// POST /api/v1/service-categories
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateServiceCategory>,
) -> AppResult<(StatusCode, Json<ServiceCategory>)> {
    input.validate()?;
    let category = ServiceCategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Service category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/service-categories
///
/// Summaries carrying the number of services in each category.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ServiceCategorySummary>>> {
    let rows = ServiceCategoryRepo::list_summaries(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/service-categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ServiceCategory>> {
    let category = ServiceCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(category))
}

/// GET /api/v1/service-categories/{id}/services
pub async fn list_services(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ServiceItem>>> {
    ServiceCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let services = ServiceItemRepo::list_by_category(&state.pool, id).await?;
    Ok(Json(services))
}

/// PUT|PATCH /api/v1/service-categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateServiceCategory>,
) -> AppResult<Json<ServiceCategory>> {
    input.validate()?;
    let category = ServiceCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(category_id = id, "Service category updated");
    Ok(Json(category))
}

/// DELETE /api/v1/service-categories/{id}
///
/// Also deletes every service in the category.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ServiceCategoryRepo::delete(&state.pool, id).await? {
        tracing::info!(category_id = id, "Service category deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
