//! Course review model and DTOs.

use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub rating: i16,
    pub comment: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Review joined with the author's username, as shown on course pages.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithAuthor {
    pub id: DbId,
    pub user: String,
    pub rating: i16,
    pub comment: String,
    pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateReview {
    pub user_id: DbId,
    pub course_id: DbId,
    pub rating: i16,
    pub comment: String,
}
