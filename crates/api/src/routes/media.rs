use axum::routing::post;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
///
/// ```text
/// POST   /{folder}    -> upload (multipart, field `file`)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{folder}", post(media::upload))
}
