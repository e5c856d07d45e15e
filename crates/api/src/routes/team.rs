use axum::routing::get;
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/team`.
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
        .route("/", get(team::list).post(team::create))
        .route("/featured", get(team::featured))
        .route(
            "/{id}",
            get(team::get_by_id)
                .put(team::update)
                .patch(team::update)
                .delete(team::delete),
        )
}
