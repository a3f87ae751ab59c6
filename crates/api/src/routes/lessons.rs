use axum::routing::post;
use axum::Router;

use crate::handlers::lessons;
use crate::state::AppState;

/// Routes mounted at `/lessons`.
///
/// ```text
/// POST /{id}/complete         -> complete_lesson
/// POST /{id}/update-progress  -> update_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/complete", post(lessons::complete_lesson))
        .route("/{id}/update-progress", post(lessons::update_progress))
}
