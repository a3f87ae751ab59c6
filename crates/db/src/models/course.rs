//! Course entity model, DTOs, and catalog list projection.

use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::status::{CourseStatus, StatusId};

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub instructor_id: DbId,
    pub category_id: Option<DbId>,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub about: String,
    /// JSON array of bullet strings.
    pub what_will_learn: serde_json::Value,
    /// JSON array of bullet strings.
    pub requirements: serde_json::Value,
    pub price_cents: i64,
    pub old_price_cents: Option<i64>,
    pub thumbnail: Option<String>,
    pub trailer_url: Option<String>,
    pub status_id: StatusId,
    pub level: String,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Course {
    pub fn status(&self) -> Option<CourseStatus> {
        CourseStatus::from_id(self.status_id)
    }

    pub fn is_published(&self) -> bool {
        self.status() == Some(CourseStatus::Published)
    }
}

/// Catalog list row: a course joined with its category, instructor, and lesson count.
#[derive(Debug, Clone, FromRow)]
pub struct CourseListRow {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub price_cents: i64,
    pub old_price_cents: Option<i64>,
    pub thumbnail: Option<String>,
    pub level: String,
    pub status_id: StatusId,
    pub is_featured: bool,
    pub category_id: Option<DbId>,
    pub category_title: Option<String>,
    pub category_slug: Option<String>,
    pub instructor_username: String,
    pub total_lessons: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a course.
#[derive(Debug)]
pub struct CreateCourse {
    pub instructor_id: DbId,
    pub category_id: Option<DbId>,
    pub title: String,
    /// Derived from `title` when `None`.
    pub slug: Option<String>,
    pub description: String,
    pub about: String,
    pub what_will_learn: Vec<String>,
    pub requirements: Vec<String>,
    pub price_cents: i64,
    pub old_price_cents: Option<i64>,
    pub thumbnail: Option<String>,
    pub trailer_url: Option<String>,
    pub status: CourseStatus,
    pub level: String,
    pub is_featured: bool,
}

/// Filters for the catalog list query.
#[derive(Debug, Default)]
pub struct CourseListFilter {
    /// When `false`, only published courses are returned.
    pub include_unpublished: bool,
    pub category_slug: Option<String>,
    pub limit: i64,
    pub offset: i64,
}
