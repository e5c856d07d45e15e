//! Handlers for the `/navigation` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::navigation::{CreateNavigation, UpdateNavigation};
use pixelbox_db::repositories::NavigationRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;
use crate::views::{resolve_all, NavigationView};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Navigation",
        id,
    })
}

/// POST /api/v1/navigation
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNavigation>,
) -> AppResult<(StatusCode, Json<NavigationView>)> {
    input.validate()?;
    let navigation = NavigationRepo::create(&state.pool, &input).await?;
    tracing::info!(navigation_id = navigation.id, "Navigation created");
    Ok((
        StatusCode::CREATED,
        Json(NavigationView::new(navigation, &state.media)),
    ))
}

/// GET /api/v1/navigation
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NavigationView>>> {
    let rows = NavigationRepo::list(&state.pool).await?;
    Ok(Json(resolve_all(rows, &state.media, NavigationView::new)))
}

/// GET /api/v1/navigation/current
///
/// The site navigation, or 404 if it has not been configured.
pub async fn current(State(state): State<AppState>) -> AppResult<Json<NavigationView>> {
    let navigation = NavigationRepo::current(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::Unset { what: "navigation" }))?;
    Ok(Json(NavigationView::new(navigation, &state.media)))
}

/// GET /api/v1/navigation/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<NavigationView>> {
    let navigation = NavigationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(NavigationView::new(navigation, &state.media)))
}

/// PUT|PATCH /api/v1/navigation/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateNavigation>,
) -> AppResult<Json<NavigationView>> {
    input.validate()?;
    let navigation = NavigationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(navigation_id = id, "Navigation updated");
    Ok(Json(NavigationView::new(navigation, &state.media)))
}

/// DELETE /api/v1/navigation/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if NavigationRepo::delete(&state.pool, id).await? {
        tracing::info!(navigation_id = id, "Navigation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
