//! Handlers for course reviews (`/courses/{slug}/reviews`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use coursehub_core::catalog::validate_rating;
use coursehub_core::error::CoreError;
use coursehub_db::models::review::{CreateReview, Review, ReviewWithAuthor};
use coursehub_db::repositories::ReviewRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::learning::visibility::find_visible_course;
use crate::middleware::auth::{AuthUser, CurrentRequester};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: i16,
    pub comment: String,
}

/// GET /api/v1/courses/{slug}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    CurrentRequester(requester): CurrentRequester,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Vec<ReviewWithAuthor>>>> {
    let course = find_visible_course(&state.pool, &requester, &slug).await?;
    let reviews = ReviewRepo::list_for_course(&state.pool, course.id).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// POST /api/v1/courses/{slug}/reviews
///
/// One review per user per course; a second attempt is 409 Conflict.
pub async fn create_review(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
    Json(input): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    validate_rating(input.rating)?;
    let comment = input.comment.trim();
    if comment.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment must not be empty".into(),
        )));
    }

    let course = find_visible_course(&state.pool, &auth_user.requester(), &slug).await?;

    let review = ReviewRepo::create(
        &state.pool,
        &CreateReview {
            user_id: auth_user.user_id,
            course_id: course.id,
            rating: input.rating,
            comment: comment.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = auth_user.user_id, course_id = course.id, "Review created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}
