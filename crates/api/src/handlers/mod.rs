pub mod auth;
pub mod categories;
pub mod courses;
pub mod lessons;
pub mod reviews;
