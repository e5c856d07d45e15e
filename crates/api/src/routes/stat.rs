use axum::routing::get;
use axum::Router;

use crate::handlers::stat;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET    /            -> list (cached)
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// PATCH  /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stat::list).post(stat::create))
        .route(
            "/{id}",
            get(stat::get_by_id)
                .put(stat::update)
                .patch(stat::update)
                .delete(stat::delete),
        )
}
