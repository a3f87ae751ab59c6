//! Repository for the `courses` table.

use coursehub_core::catalog::slugify;
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CourseListFilter, CourseListRow, CreateCourse};
use crate::models::status::{CourseStatus, StatusId};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, instructor_id, category_id, title, slug, description, about, \
                        what_will_learn, requirements, price_cents, old_price_cents, \
                        thumbnail, trailer_url, status_id, level, is_featured, \
                        created_at, updated_at";

/// Provides CRUD and catalog queries for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    ///
    /// The slug is derived from the title when `input.slug` is `None`.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let slug = input
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&input.title));
        let query = format!(
            "INSERT INTO courses (
                instructor_id, category_id, title, slug, description, about,
                what_will_learn, requirements, price_cents, old_price_cents,
                thumbnail, trailer_url, status_id, level, is_featured
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(input.instructor_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.about)
            .bind(serde_json::json!(input.what_will_learn))
            .bind(serde_json::json!(input.requirements))
            .bind(input.price_cents)
            .bind(input.old_price_cents)
            .bind(&input.thumbnail)
            .bind(&input.trailer_url)
            .bind(input.status.id())
            .bind(&input.level)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Find a course by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a course by its unique slug, regardless of status.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE slug = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List catalog rows, newest first, with category, instructor, and lesson count.
    pub async fn list(
        pool: &PgPool,
        filter: &CourseListFilter,
    ) -> Result<Vec<CourseListRow>, sqlx::Error> {
        sqlx::query_as::<_, CourseListRow>(
            "SELECT c.id, c.title, c.slug, c.price_cents, c.old_price_cents, c.thumbnail,
                    c.level, c.status_id, c.is_featured, c.category_id,
                    cat.title AS category_title, cat.slug AS category_slug,
                    u.username AS instructor_username,
                    (SELECT COUNT(*)
                       FROM lessons l
                       JOIN course_modules m ON m.id = l.module_id
                      WHERE m.course_id = c.id) AS total_lessons,
                    c.created_at
               FROM courses c
               JOIN users u ON u.id = c.instructor_id
               LEFT JOIN categories cat ON cat.id = c.category_id
              WHERE ($1 OR c.status_id = $2)
                AND ($3::TEXT IS NULL OR cat.slug = $3)
              ORDER BY c.created_at DESC, c.id DESC
              LIMIT $4 OFFSET $5",
        )
        .bind(filter.include_unpublished)
        .bind(CourseStatus::Published.id())
        .bind(&filter.category_slug)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(pool)
        .await
    }

    /// Change a course's lifecycle status. Returns `true` if the row was updated.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: CourseStatus,
    ) -> Result<bool, sqlx::Error> {
        let status_id: StatusId = status.into();
        let result = sqlx::query("UPDATE courses SET status_id = $2 WHERE id = $1")
            .bind(id)
            .bind(status_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
