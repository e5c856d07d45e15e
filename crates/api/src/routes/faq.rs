use axum::routing::get;
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// Routes mounted at `/faqs`.
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
        .route("/", get(faq::list).post(faq::create))
        .route("/featured", get(faq::featured))
        .route(
            "/{id}",
            get(faq::get_by_id)
                .put(faq::update)
                .patch(faq::update)
                .delete(faq::delete),
        )
}
