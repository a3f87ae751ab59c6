//! Repository for the `lessons` table.

use coursehub_core::catalog::slugify;
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::lesson::{CreateLesson, Lesson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, module_id, title, slug, lesson_type, content, video_source, \
                        video_url, duration_secs, is_preview, sort_order, created_at, updated_at";

/// Provides CRUD operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// Insert a new lesson. The slug is derived from the title when not supplied.
    pub async fn create(pool: &PgPool, input: &CreateLesson) -> Result<Lesson, sqlx::Error> {
        let slug = input
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&input.title));
        let query = format!(
            "INSERT INTO lessons (
                module_id, title, slug, lesson_type, content, video_source,
                video_url, duration_secs, is_preview, sort_order
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(input.module_id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.lesson_type)
            .bind(&input.content)
            .bind(&input.video_source)
            .bind(&input.video_url)
            .bind(input.duration_secs)
            .bind(input.is_preview)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All lessons of a course, ordered by `sort_order` within each module.
    ///
    /// Callers group by `module_id`; relative order inside a module is preserved.
    pub async fn list_by_course(pool: &PgPool, course_id: DbId) -> Result<Vec<Lesson>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lessons
             WHERE module_id IN (SELECT id FROM course_modules WHERE course_id = $1)
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }
}
