//! Category entity model and DTOs.

use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub icon_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category.
#[derive(Debug)]
pub struct CreateCategory {
    pub title: String,
    /// Derived from `title` when `None`.
    pub slug: Option<String>,
    pub icon_url: Option<String>,
}
