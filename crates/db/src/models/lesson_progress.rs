//! Per-user lesson progress model.

use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `lesson_progress` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub lesson_id: DbId,
    pub is_completed: bool,
    /// Playback offset in seconds.
    pub last_watched_position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
