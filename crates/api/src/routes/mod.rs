pub mod about;
pub mod contact;
pub mod faq;
pub mod feature;
pub mod health;
pub mod hero;
pub mod media;
pub mod navigation;
pub mod portfolio;
pub mod service;
pub mod stat;
pub mod team;
pub mod testimonial;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /navigation                       singleton; list, create, current, CRUD by id
/// /hero                             singleton; list, create, current, CRUD by id
/// /about                            singleton; current is cached
/// /contact-info                     singleton; list, create, current, CRUD by id
///
/// /service-categories               CRUD; list carries services_count
/// /service-categories/{id}/services services in one category
/// /services                         CRUD; featured (cached)
/// /features                         CRUD
/// /stats                            CRUD; list is cached
/// /testimonials                     CRUD; featured (cached)
/// /team                             CRUD; featured (cached)
/// /faqs                             CRUD; featured (cached)
///
/// /portfolio                        CRUD keyed by slug; featured (cached)
/// /portfolio/by-service/{id}        projects linked to a service
/// /portfolio/{slug}/gallery         gallery images, CRUD by id
///
/// /contact-form                     submissions; unread; {id}/mark_read
/// /media/{folder}                   multipart upload
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Singleton content.
        .nest("/navigation", navigation::router())
        .nest("/hero", hero::router())
        .nest("/about", about::router())
        .nest("/contact-info", contact::info_router())
        // Services.
        .nest("/service-categories", service::category_router())
        .nest("/services", service::router())
        // List content.
        .nest("/features", feature::router())
        .nest("/stats", stat::router())
        .nest("/testimonials", testimonial::router())
        .nest("/team", team::router())
        .nest("/faqs", faq::router())
        // Portfolio and gallery.
        .nest("/portfolio", portfolio::router())
        // Visitor messages.
        .nest("/contact-form", contact::form_router())
        // Uploads.
        .nest("/media", media::router())
}
