//! Handlers for the `/services` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::service::{CreateServiceItem, ServiceItem, UpdateServiceItem};
use pixelbox_db::repositories::ServiceItemRepo;
use serde_json::Value;
use validator::Validate;

use crate::cache::keys;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::to_cached;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ServiceItem",
        id,
    })
}

/// POST /api/v1/services
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateServiceItem>,
) -> AppResult<(StatusCode, Json<ServiceItem>)> {
    input.validate()?;
    let service = ServiceItemRepo::create(&state.pool, &input).await?;
    tracing::info!(
        service_id = service.id,
        category_id = service.category_id,
        title = %service.title,
        "Service created",
    );
    Ok((StatusCode::CREATED, Json(service)))
}

/// GET /api/v1/services
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ServiceItem>>> {
    let rows = ServiceItemRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/services/featured
///
/// Cached for the configured TTL.
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let pool = &state.pool;
    let body = state
        .cache
        .get_or_try_insert_with(keys::FEATURED_SERVICES, || async move {
            let rows = ServiceItemRepo::list_featured(pool).await?;
            to_cached(&rows)
        })
        .await?;
    Ok(Json(body))
}

/// GET /api/v1/services/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ServiceItem>> {
    let service = ServiceItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(service))
}

/// PUT|PATCH /api/v1/services/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateServiceItem>,
) -> AppResult<Json<ServiceItem>> {
    input.validate()?;
    let service = ServiceItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(service_id = id, "Service updated");
    Ok(Json(service))
}

/// DELETE /api/v1/services/{id}
///
/// Portfolio projects linked to the service are kept and unlinked.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ServiceItemRepo::delete(&state.pool, id).await? {
        tracing::info!(service_id = id, "Service deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
