use axum::routing::get;
use axum::Router;

use crate::handlers::hero;
use crate::state::AppState;

/// Routes mounted at `/hero`.
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
        .route("/", get(hero::list).post(hero::create))
        .route("/current", get(hero::current))
        .route(
            "/{id}",
            get(hero::get_by_id)
                .put(hero::update)
                .patch(hero::update)
                .delete(hero::delete),
        )
}
