//! Handlers for the `/hero` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::hero::{CreateHero, UpdateHero};
use pixelbox_db::repositories::HeroRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;
use crate::views::{resolve_all, HeroView};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Hero", id })
}

/// POST /api/v1/hero
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateHero>,
) -> AppResult<(StatusCode, Json<HeroView>)> {
    input.validate()?;
    let hero = HeroRepo::create(&state.pool, &input).await?;
    tracing::info!(hero_id = hero.id, title = %hero.title, "Hero created");
    Ok((StatusCode::CREATED, Json(HeroView::new(hero, &state.media))))
}

/// GET /api/v1/hero
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<HeroView>>> {
    let rows = HeroRepo::list(&state.pool).await?;
    Ok(Json(resolve_all(rows, &state.media, HeroView::new)))
}

/// GET /api/v1/hero/current
pub async fn current(State(state): State<AppState>) -> AppResult<Json<HeroView>> {
    let hero = HeroRepo::current(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::Unset { what: "hero" }))?;
    Ok(Json(HeroView::new(hero, &state.media)))
}

/// GET /api/v1/hero/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeroView>> {
    let hero = HeroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(HeroView::new(hero, &state.media)))
}

/// PUT|PATCH /api/v1/hero/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateHero>,
) -> AppResult<Json<HeroView>> {
    input.validate()?;
    let hero = HeroRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(hero_id = id, "Hero updated");
    Ok(Json(HeroView::new(hero, &state.media)))
}

/// DELETE /api/v1/hero/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if HeroRepo::delete(&state.pool, id).await? {
        tracing::info!(hero_id = id, "Hero deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
