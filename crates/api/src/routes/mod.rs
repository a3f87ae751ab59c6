pub mod auth;
pub mod categories;
pub mod courses;
pub mod health;
pub mod lessons;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
/// /auth/refresh                           refresh (public)
/// /auth/logout                            logout (requires auth)
/// /auth/me                                profile (requires auth)
///
/// /categories                             list
///
/// /courses                                list (optional auth)
/// /courses/{slug}                         detail (optional auth)
/// /courses/{slug}/enroll                  enroll (requires auth)
/// /courses/{slug}/reviews                 list, create (create requires auth)
///
/// /lessons/{id}/complete                  mark completed (requires auth)
/// /lessons/{id}/update-progress           record playback position (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/categories", categories::router())
        .nest("/courses", courses::router())
        .nest("/lessons", lessons::router())
}
