//! Repository for the `enrollments` table.

use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::is_unique_violation;
use crate::models::enrollment::Enrollment;

const COLUMNS: &str = "id, user_id, course_id, created_at";

/// Name of the one-enrollment-per-user-per-course constraint.
pub const UQ_USER_COURSE: &str = "uq_enrollments_user_course";

/// Provides create and lookup operations for enrollments.
///
/// Enrollments are never updated or deleted by the application.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Whether `user_id` is enrolled in `course_id`.
    pub async fn exists(pool: &PgPool, user_id: DbId, course_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM enrollments WHERE user_id = $1 AND course_id = $2)",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await
    }

    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an enrollment.
    ///
    /// Returns `None` when the (user, course) pair is already enrolled, including
    /// when a concurrent request won the race to insert it.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (user_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_one(pool)
            .await;

        match result {
            Ok(enrollment) => Ok(Some(enrollment)),
            Err(e) if is_unique_violation(&e, Some(UQ_USER_COURSE)) => {
                tracing::debug!(user_id, course_id, "Enrollment insert lost a race");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Number of enrollment rows for a (user, course) pair. Used to verify uniqueness.
    pub async fn count_for(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM enrollments WHERE user_id = $1 AND course_id = $2",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await
    }
}
