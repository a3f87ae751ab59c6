//! Well-known role name constants.
//!
//! These must match the seed data in `20261001000002_create_users_and_sessions.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STAFF: &str = "staff";
pub const ROLE_STUDENT: &str = "student";

/// Role assigned to self-registered accounts.
pub const DEFAULT_SIGNUP_ROLE: &str = ROLE_STUDENT;

/// Whether a role may bypass enrollment gating and see unpublished courses.
pub fn is_staff_role(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_STAFF
}
