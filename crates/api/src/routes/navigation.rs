use axum::routing::get;
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Routes mounted at `/navigation`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /current     -> current
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// PATCH  /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(navigation::list).post(navigation::create))
        .route("/current", get(navigation::current))
        .route(
            "/{id}",
            get(navigation::get_by_id)
                .put(navigation::update)
                .patch(navigation::update)
                .delete(navigation::delete),
        )
}
