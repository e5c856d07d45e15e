//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::testimonial::{CreateTestimonial, UpdateTestimonial};
use pixelbox_db::repositories::TestimonialRepo;
use serde_json::Value;
use validator::Validate;

use crate::cache::keys;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::to_cached;
use crate::state::AppState;
use crate::views::{resolve_all, TestimonialView};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Testimonial",
        id,
    })
}

/// POST /api/v1/testimonials
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<TestimonialView>)> {
    input.validate()?;
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    tracing::info!(
        testimonial_id = testimonial.id,
        name = %testimonial.name,
        "Testimonial created",
    );
    Ok((
        StatusCode::CREATED,
        Json(TestimonialView::new(testimonial, &state.media)),
    ))
}

/// GET /api/v1/testimonials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TestimonialView>>> {
    let rows = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(resolve_all(rows, &state.media, TestimonialView::new)))
}

/// GET /api/v1/testimonials/featured
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let pool = &state.pool;
    let media = &state.media;
    let body = state
        .cache
        .get_or_try_insert_with(keys::FEATURED_TESTIMONIALS, || async move {
            let rows = TestimonialRepo::list_featured(pool).await?;
            to_cached(&resolve_all(rows, media, TestimonialView::new))
        })
        .await?;
    Ok(Json(body))
}

/// GET /api/v1/testimonials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TestimonialView>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(TestimonialView::new(testimonial, &state.media)))
}

/// PUT|PATCH /api/v1/testimonials/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateTestimonial>,
) -> AppResult<Json<TestimonialView>> {
    input.validate()?;
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(testimonial_id = id, "Testimonial updated");
    Ok(Json(TestimonialView::new(testimonial, &state.media)))
}

/// DELETE /api/v1/testimonials/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TestimonialRepo::delete(&state.pool, id).await? {
        tracing::info!(testimonial_id = id, "Testimonial deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
