//! Enrollment entity model.

use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `enrollments` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub created_at: Timestamp,
}
