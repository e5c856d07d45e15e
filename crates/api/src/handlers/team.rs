//! Handlers for the `/team` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::team::{CreateTeamMember, UpdateTeamMember};
use pixelbox_db::repositories::TeamRepo;
use serde_json::Value;
use validator::Validate;

use crate::cache::keys;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::to_cached;
use crate::state::AppState;
use crate::views::{resolve_all, TeamMemberView};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TeamMember",
        id,
    })
}

/// POST /api/v1/team
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTeamMember>,
) -> AppResult<(StatusCode, Json<TeamMemberView>)> {
    input.validate()?;
    let member = TeamRepo::create(&state.pool, &input).await?;
    tracing::info!(member_id = member.id, name = %member.name, "Team member created");
    Ok((
        StatusCode::CREATED,
        Json(TeamMemberView::new(member, &state.media)),
    ))
}

/// GET /api/v1/team
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TeamMemberView>>> {
    let rows = TeamRepo::list(&state.pool).await?;
    Ok(Json(resolve_all(rows, &state.media, TeamMemberView::new)))
}

/// GET /api/v1/team/featured
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let pool = &state.pool;
    let media = &state.media;
    let body = state
        .cache
        .get_or_try_insert_with(keys::FEATURED_TEAM, || async move {
            let rows = TeamRepo::list_featured(pool).await?;
            to_cached(&resolve_all(rows, media, TeamMemberView::new))
        })
        .await?;
    Ok(Json(body))
}

/// GET /api/v1/team/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TeamMemberView>> {
    let member = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(TeamMemberView::new(member, &state.media)))
}

/// PUT|PATCH /api/v1/team/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateTeamMember>,
) -> AppResult<Json<TeamMemberView>> {
    input.validate()?;
    let member = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(member_id = id, "Team member updated");
    Ok(Json(TeamMemberView::new(member, &state.media)))
}

/// DELETE /api/v1/team/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TeamRepo::delete(&state.pool, id).await? {
        tracing::info!(member_id = id, "Team member deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
