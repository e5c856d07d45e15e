use axum::routing::get;
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
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
        .route("/", get(testimonial::list).post(testimonial::create))
        .route("/featured", get(testimonial::featured))
        .route(
            "/{id}",
            get(testimonial::get_by_id)
                .put(testimonial::update)
                .patch(testimonial::update)
                .delete(testimonial::delete),
        )
}
