//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Read-side projections used by the catalog queries, where needed

pub mod category;
pub mod course;
pub mod course_module;
pub mod enrollment;
pub mod lesson;
pub mod lesson_progress;
pub mod review;
pub mod role;
pub mod session;
pub mod status;
pub mod user;
