//! Repository for the `course_modules` table.

use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::course_module::{CourseModule, CreateCourseModule};

const COLUMNS: &str = "id, course_id, title, description, sort_order, created_at, updated_at";

pub struct CourseModuleRepo;

impl CourseModuleRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCourseModule,
    ) -> Result<CourseModule, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_modules (course_id, title, description, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseModule>(&query)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Modules of a course in display order.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CourseModule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM course_modules
             WHERE course_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, CourseModule>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }
}
