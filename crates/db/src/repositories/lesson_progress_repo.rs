//! Repository for the `lesson_progress` table.
//!
//! Rows are created lazily on first interaction and mutated in place. The
//! find-or-create path inserts first and re-fetches when the unique
//! constraint suppressed the insert, so concurrent first calls converge on a
//! single row.

use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::lesson_progress::LessonProgress;

const COLUMNS: &str = "id, user_id, lesson_id, is_completed, last_watched_position, \
                        created_at, updated_at";

pub struct LessonProgressRepo;

impl LessonProgressRepo {
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: DbId,
    ) -> Result<Option<LessonProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lesson_progress WHERE user_id = $1 AND lesson_id = $2"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(user_id)
            .bind(lesson_id)
            .fetch_optional(pool)
            .await
    }

    /// Return the (user, lesson) progress row, creating it if absent.
    pub async fn find_or_create(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: DbId,
    ) -> Result<LessonProgress, sqlx::Error> {
        let insert = format!(
            "INSERT INTO lesson_progress (user_id, lesson_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_lesson_progress_user_lesson DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, LessonProgress>(&insert)
            .bind(user_id)
            .bind(lesson_id)
            .fetch_optional(pool)
            .await?;

        if let Some(progress) = inserted {
            return Ok(progress);
        }

        // The row exists (possibly inserted by a concurrent request); read it back.
        let query = format!(
            "SELECT {COLUMNS} FROM lesson_progress WHERE user_id = $1 AND lesson_id = $2"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(user_id)
            .bind(lesson_id)
            .fetch_one(pool)
            .await
    }

    /// Flip `is_completed` to true.
    ///
    /// Returns `true` only for the call that performed the transition; a row
    /// that was already complete is left untouched and yields `false`.
    pub async fn mark_completed(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE lesson_progress SET is_completed = true
             WHERE id = $1 AND is_completed = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the playback position (last write wins).
    pub async fn set_position(
        pool: &PgPool,
        id: DbId,
        seconds: i32,
    ) -> Result<LessonProgress, sqlx::Error> {
        let query = format!(
            "UPDATE lesson_progress SET last_watched_position = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(id)
            .bind(seconds)
            .fetch_one(pool)
            .await
    }

    /// IDs of lessons in `course_id` that `user_id` has completed.
    pub async fn completed_lesson_ids_for_course(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT p.lesson_id
               FROM lesson_progress p
               JOIN lessons l ON l.id = p.lesson_id
               JOIN course_modules m ON m.id = l.module_id
              WHERE p.user_id = $1
                AND m.course_id = $2
                AND p.is_completed = true",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_all(pool)
        .await
    }

    /// Number of progress rows for a (user, lesson) pair. Used to verify uniqueness.
    pub async fn count_for(
        pool: &PgPool,
        user_id: DbId,
        lesson_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM lesson_progress WHERE user_id = $1 AND lesson_id = $2",
        )
        .bind(user_id)
        .bind(lesson_id)
        .fetch_one(pool)
        .await
    }
}
