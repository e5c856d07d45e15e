//! Handlers for the `/faqs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::faq::{CreateFaq, Faq, UpdateFaq};
use pixelbox_db::repositories::FaqRepo;
use serde_json::Value;
use validator::Validate;

use crate::cache::keys;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::to_cached;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Faq", id })
}

/// POST /api/v1/faqs
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFaq>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    input.validate()?;
    let faq = FaqRepo::create(&state.pool, &input).await?;
    tracing::info!(faq_id = faq.id, "FAQ created");
    Ok((StatusCode::CREATED, Json(faq)))
}

/// GET /api/v1/faqs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    let rows = FaqRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/faqs/featured
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let pool = &state.pool;
    let body = state
        .cache
        .get_or_try_insert_with(keys::FEATURED_FAQS, || async move {
            let rows = FaqRepo::list_featured(pool).await?;
            to_cached(&rows)
        })
        .await?;
    Ok(Json(body))
}

/// GET /api/v1/faqs/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Faq>> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(faq))
}

/// PUT|PATCH /api/v1/faqs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateFaq>,
) -> AppResult<Json<Faq>> {
    input.validate()?;
    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(faq_id = id, "FAQ updated");
    Ok(Json(faq))
}

/// DELETE /api/v1/faqs/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FaqRepo::delete(&state.pool, id).await? {
        tracing::info!(faq_id = id, "FAQ deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
