//! Route definitions for the `/portfolio` resource.
//!
//! Detail routes are keyed by slug; gallery images nest under the project.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Routes mounted at `/portfolio`.
///
/// ```text
/// GET    /                           -> list
/// POST   /                           -> create
/// GET    /featured                   -> featured (cached)
/// GET    /by-service/{service_id}    -> by_service
/// GET    /{slug}                     -> get_by_slug (with gallery_images)
/// PUT    /{slug}                     -> update
/// PATCH  /{slug}                     -> update
/// DELETE /{slug}                     -> delete
///
/// GET    /{slug}/gallery             -> list_gallery
/// POST   /{slug}/gallery             -> create_gallery_image
/// PUT    /{slug}/gallery/{id}        -> update_gallery_image
/// PATCH  /{slug}/gallery/{id}        -> update_gallery_image
/// DELETE /{slug}/gallery/{id}        -> delete_gallery_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::list).post(portfolio::create))
        .route("/featured", get(portfolio::featured))
        .route("/by-service/{service_id}", get(portfolio::by_service))
        .route(
            "/{slug}",
            get(portfolio::get_by_slug)
                .put(portfolio::update)
                .patch(portfolio::update)
                .delete(portfolio::delete),
        )
        .route(
            "/{slug}/gallery",
            get(portfolio::list_gallery).post(portfolio::create_gallery_image),
        )
        .route(
            "/{slug}/gallery/{id}",
            put(portfolio::update_gallery_image)
                .patch(portfolio::update_gallery_image)
                .delete(portfolio::delete_gallery_image),
        )
}
