//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod course_module_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod lesson_progress_repo;
pub mod lesson_repo;
pub mod review_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use course_module_repo::CourseModuleRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lesson_progress_repo::LessonProgressRepo;
pub use lesson_repo::LessonRepo;
pub use review_repo::ReviewRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: i64 = 20;
/// Upper bound on page size.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a caller-supplied page size into `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
