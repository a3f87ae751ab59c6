//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /courses` (`?category=&limit=&offset=`).
///
/// `limit` and `offset` are clamped in the repository layer via
/// `clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct CourseListParams {
    /// Category slug to filter by.
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
