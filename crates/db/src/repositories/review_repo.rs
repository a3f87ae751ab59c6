//! Repository for the `reviews` table.

use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, ReviewWithAuthor};

const COLUMNS: &str = "id, user_id, course_id, rating, comment, created_at, updated_at";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review.
    ///
    /// A second review by the same user for the same course fails with a
    /// unique violation on `uq_reviews_user_course`.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (user_id, course_id, rating, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.user_id)
            .bind(input.course_id)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Reviews for a course with author usernames, newest first.
    pub async fn list_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.id, u.username AS \"user\", r.rating, r.comment, r.created_at
               FROM reviews r
               JOIN users u ON u.id = r.user_id
              WHERE r.course_id = $1
              ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(course_id)
        .fetch_all(pool)
        .await
    }
}
