//! Handlers for the `/portfolio` resource and its per-project gallery.
//!
//! Projects are addressed by slug. Slugs are assigned on create and never
//! change afterwards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::error::CoreError;
use pixelbox_core::types::DbId;
use pixelbox_db::models::portfolio::{
    CreateGalleryImage, CreatePortfolioProject, PortfolioProject, UpdateGalleryImage,
    UpdatePortfolioProject,
};
use pixelbox_db::repositories::{GalleryImageRepo, PortfolioRepo};
use serde_json::Value;
use validator::Validate;

use crate::cache::keys;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::to_cached;
use crate::state::AppState;
use crate::views::{resolve_all, GalleryImageView, PortfolioDetailView, PortfolioProjectView};

fn project_not_found(slug: &str) -> AppError {
    AppError::Core(CoreError::SlugNotFound {
        entity: "PortfolioProject",
        slug: slug.to_string(),
    })
}

fn image_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "PortfolioGalleryImage",
        id,
    })
}

async fn find_project(state: &AppState, slug: &str) -> AppResult<PortfolioProject> {
    PortfolioRepo::find_by_slug(&state.pool, slug)
        .await?
        .ok_or_else(|| project_not_found(slug))
}

async fn detail(state: &AppState, project: PortfolioProject) -> AppResult<PortfolioDetailView> {
    let gallery = GalleryImageRepo::list_for_project(&state.pool, project.id).await?;
    Ok(PortfolioDetailView::new(project, gallery, &state.media))
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// POST /api/v1/portfolio
///
/// Creates the project and assigns its slug from the title.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePortfolioProject>,
) -> AppResult<(StatusCode, Json<PortfolioDetailView>)> {
    input.validate()?;
    let project = PortfolioRepo::create(&state.pool, &input).await?;
    tracing::info!(
        project_id = project.id,
        slug = project.slug.as_deref().unwrap_or_default(),
        "Portfolio project created",
    );
    let body = PortfolioDetailView::new(project, Vec::new(), &state.media);
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /api/v1/portfolio
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PortfolioProjectView>>> {
    let rows = PortfolioRepo::list(&state.pool).await?;
    Ok(Json(resolve_all(rows, &state.media, PortfolioProjectView::new)))
}

/// GET /api/v1/portfolio/featured
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let pool = &state.pool;
    let media = &state.media;
    let body = state
        .cache
        .get_or_try_insert_with(keys::FEATURED_PORTFOLIO, || async move {
            let rows = PortfolioRepo::list_featured(pool).await?;
            to_cached(&resolve_all(rows, media, PortfolioProjectView::new))
        })
        .await?;
    Ok(Json(body))
}

/// GET /api/v1/portfolio/by-service/{service_id}
///
/// Empty list when the service has no projects or does not exist.
pub async fn by_service(
    State(state): State<AppState>,
    Path(service_id): Path<DbId>,
) -> AppResult<Json<Vec<PortfolioProjectView>>> {
    let rows = PortfolioRepo::list_by_service(&state.pool, service_id).await?;
    Ok(Json(resolve_all(rows, &state.media, PortfolioProjectView::new)))
}

/// GET /api/v1/portfolio/{slug}
///
/// Full project detail with its gallery images.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PortfolioDetailView>> {
    let project = find_project(&state, &slug).await?;
    Ok(Json(detail(&state, project).await?))
}

/// PUT|PATCH /api/v1/portfolio/{slug}
pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppJson(input): AppJson<UpdatePortfolioProject>,
) -> AppResult<Json<PortfolioDetailView>> {
    input.validate()?;
    let project = PortfolioRepo::update_by_slug(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| project_not_found(&slug))?;
    tracing::info!(project_id = project.id, slug = %slug, "Portfolio project updated");
    Ok(Json(detail(&state, project).await?))
}

/// DELETE /api/v1/portfolio/{slug}
///
/// Removes the project and its gallery. The slug stays retired.
pub async fn delete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    if PortfolioRepo::delete_by_slug(&state.pool, &slug).await? {
        tracing::info!(slug = %slug, "Portfolio project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(project_not_found(&slug))
    }
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// GET /api/v1/portfolio/{slug}/gallery
pub async fn list_gallery(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<GalleryImageView>>> {
    let project = find_project(&state, &slug).await?;
    let images = GalleryImageRepo::list_for_project(&state.pool, project.id).await?;
    Ok(Json(resolve_all(images, &state.media, GalleryImageView::new)))
}

/// POST /api/v1/portfolio/{slug}/gallery
pub async fn create_gallery_image(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppJson(input): AppJson<CreateGalleryImage>,
) -> AppResult<(StatusCode, Json<GalleryImageView>)> {
    input.validate()?;
    if input.image.is_none() {
        return Err(AppError::BadRequest(
            "A gallery image needs an uploaded file or an external URL".to_string(),
        ));
    }
    let project = find_project(&state, &slug).await?;
    let image = GalleryImageRepo::create(&state.pool, project.id, &input).await?;
    tracing::info!(
        project_id = project.id,
        image_id = image.id,
        "Gallery image added",
    );
    Ok((
        StatusCode::CREATED,
        Json(GalleryImageView::new(image, &state.media)),
    ))
}

/// PUT|PATCH /api/v1/portfolio/{slug}/gallery/{id}
pub async fn update_gallery_image(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, DbId)>,
    AppJson(input): AppJson<UpdateGalleryImage>,
) -> AppResult<Json<GalleryImageView>> {
    input.validate()?;
    let project = find_project(&state, &slug).await?;
    let image = GalleryImageRepo::update(&state.pool, project.id, id, &input)
        .await?
        .ok_or_else(|| image_not_found(id))?;
    tracing::info!(project_id = project.id, image_id = id, "Gallery image updated");
    Ok(Json(GalleryImageView::new(image, &state.media)))
}

/// DELETE /api/v1/portfolio/{slug}/gallery/{id}
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    let project = find_project(&state, &slug).await?;
    if GalleryImageRepo::delete(&state.pool, project.id, id).await? {
        tracing::info!(project_id = project.id, image_id = id, "Gallery image deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(image_not_found(id))
    }
}
