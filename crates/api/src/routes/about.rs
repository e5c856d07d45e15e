use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// Routes mounted at `/about`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /current     -> current (cached)
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// PATCH  /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(about::list).post(about::create))
        .route("/current", get(about::current))
        .route(
            "/{id}",
            get(about::get_by_id)
                .put(about::update)
                .patch(about::update)
                .delete(about::delete),
        )
}
