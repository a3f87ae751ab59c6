//! Route definitions for the `/courses` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{courses, reviews};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET  /                -> list_courses
/// GET  /{slug}          -> get_course
/// POST /{slug}/enroll   -> enroll (requires auth)
/// GET  /{slug}/reviews  -> list_reviews
/// POST /{slug}/reviews  -> create_review (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list_courses))
        .route("/{slug}", get(courses::get_course))
        .route("/{slug}/enroll", post(courses::enroll))
        .route(
            "/{slug}/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
}
