//! Route definitions for contact details and contact-form submissions.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{contact_form, contact_info};
use crate::state::AppState;

/// Routes mounted at `/contact-info`.
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
pub fn info_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact_info::list).post(contact_info::create))
        .route("/current", get(contact_info::current))
        .route(
            "/{id}",
            get(contact_info::get_by_id)
                .put(contact_info::update)
                .patch(contact_info::update)
                .delete(contact_info::delete),
        )
}

/// Routes mounted at `/contact-form`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /unread            -> list_unread
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// PATCH  /{id}/mark_read    -> mark_read
/// ```
pub fn form_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact_form::list).post(contact_form::create))
        .route("/unread", get(contact_form::list_unread))
        .route(
            "/{id}",
            get(contact_form::get_by_id)
                .put(contact_form::update)
                .patch(contact_form::update)
                .delete(contact_form::delete),
        )
        .route("/{id}/mark_read", patch(contact_form::mark_read))
}
