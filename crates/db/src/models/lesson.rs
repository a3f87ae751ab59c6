//! Lesson entity model and DTOs.
//!
//! `Lesson` is never serialized directly: the video fields are subject to the
//! visibility policy, so the API layer builds its own representation.

use coursehub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `lessons` table.
#[derive(Debug, Clone, FromRow)]
pub struct Lesson {
    pub id: DbId,
    pub module_id: DbId,
    pub title: String,
    pub slug: String,
    pub lesson_type: String,
    pub content: String,
    pub video_source: String,
    pub video_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub is_preview: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lesson.
#[derive(Debug)]
pub struct CreateLesson {
    pub module_id: DbId,
    pub title: String,
    /// Derived from `title` when `None`.
    pub slug: Option<String>,
    pub lesson_type: String,
    pub content: String,
    pub video_source: String,
    pub video_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub is_preview: bool,
    pub sort_order: i32,
}
