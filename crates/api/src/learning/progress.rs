//! Lesson completion and playback-position tracking.
//!
//! Both operations lazily create the (user, lesson) progress row. Completion
//! is monotone; the playback position is last-write-wins.

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use coursehub_db::models::lesson::Lesson;
use coursehub_db::models::lesson_progress::LessonProgress;
use coursehub_db::repositories::{LessonProgressRepo, LessonRepo};
use coursehub_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Result of a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionOutcome {
    pub lesson_id: DbId,
    /// Always true after the call.
    pub is_completed: bool,
    /// True when the lesson was already complete before this call.
    pub already_completed: bool,
}

/// Mark `lesson_id` completed for `user_id`.
pub async fn mark_completed(
    pool: &DbPool,
    user_id: DbId,
    lesson_id: DbId,
) -> AppResult<CompletionOutcome> {
    let lesson = find_lesson(pool, lesson_id).await?;
    let progress = LessonProgressRepo::find_or_create(pool, user_id, lesson.id).await?;
    let transitioned = LessonProgressRepo::mark_completed(pool, progress.id).await?;

    if transitioned {
        tracing::info!(user_id, lesson_id, "Lesson completed");
    }

    Ok(CompletionOutcome {
        lesson_id: lesson.id,
        is_completed: true,
        already_completed: !transitioned,
    })
}

/// Record `seconds` as the last playback position of `lesson_id` for `user_id`.
pub async fn update_position(
    pool: &DbPool,
    user_id: DbId,
    lesson_id: DbId,
    seconds: i32,
) -> AppResult<LessonProgress> {
    let lesson = find_lesson(pool, lesson_id).await?;
    let progress = LessonProgressRepo::find_or_create(pool, user_id, lesson.id).await?;
    let updated = LessonProgressRepo::set_position(pool, progress.id, seconds).await?;

    tracing::debug!(user_id, lesson_id, seconds, "Playback position updated");
    Ok(updated)
}

async fn find_lesson(pool: &DbPool, lesson_id: DbId) -> AppResult<Lesson> {
    LessonRepo::find_by_id(pool, lesson_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: lesson_id,
        }))
}
