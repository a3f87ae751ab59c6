//! Handlers for per-lesson progress: completion and playback position.

use axum::extract::{Path, State};
use axum::Json;
use coursehub_core::progress::position_from_body;
use coursehub_core::types::DbId;
use serde::Serialize;

use crate::error::AppResult;
use crate::learning::progress::{self, CompletionOutcome};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub lesson_id: DbId,
    pub last_watched_position: i32,
}

/// POST /api/v1/lessons/{id}/complete
///
/// Idempotent. `already_completed` tells whether this call changed anything.
pub async fn complete_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(lesson_id): Path<DbId>,
) -> AppResult<Json<DataResponse<CompletionOutcome>>> {
    let outcome = progress::mark_completed(&state.pool, auth_user.user_id, lesson_id).await?;
    Ok(Json(DataResponse { data: outcome }))
}

/// POST /api/v1/lessons/{id}/update-progress
///
/// Body: `{ "seconds": <number or numeric string> }`. A missing `seconds`
/// stores 0; a body that is not an object is a validation error.
pub async fn update_progress(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(lesson_id): Path<DbId>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<DataResponse<PositionResponse>>> {
    let seconds = position_from_body(&body)?;
    let updated =
        progress::update_position(&state.pool, auth_user.user_id, lesson_id, seconds).await?;

    Ok(Json(DataResponse {
        data: PositionResponse {
            lesson_id: updated.lesson_id,
            last_watched_position: updated.last_watched_position,
        },
    }))
}
