//! Repository for the `categories` table.

use coursehub_core::catalog::slugify;
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, title, slug, icon_url, created_at, updated_at";

pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category. The slug is derived from the title when not supplied.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let slug = input
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&input.title));
        let query = format!(
            "INSERT INTO categories (title, slug, icon_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.icon_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE slug = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all categories alphabetically by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY title ASC, id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }
}
