//! Route definitions for service categories and services.

use axum::routing::get;
use axum::Router;

use crate::handlers::{service, service_category};
use crate::state::AppState;

/// Routes mounted at `/service-categories`.
///
/// ```text
/// GET    /                -> list (with services_count)
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// PATCH  /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/services   -> list_services
/// ```
pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_category::list).post(service_category::create))
        .route(
            "/{id}",
            get(service_category::get_by_id)
                .put(service_category::update)
                .patch(service_category::update)
                .delete(service_category::delete),
        )
        .route("/{id}/services", get(service_category::list_services))
}

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /featured    -> featured (cached)
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// PATCH  /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service::list).post(service::create))
        .route("/featured", get(service::featured))
        .route(
            "/{id}",
            get(service::get_by_id)
                .put(service::update)
                .patch(service::update)
                .delete(service::delete),
        )
}
