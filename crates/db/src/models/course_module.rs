//! Course module (chapter) model and DTOs.

use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `course_modules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseModule {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateCourseModule {
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub sort_order: i32,
}
