//! Lesson media visibility policy.
//!
//! Decides whether a lesson's restricted fields (`video_source`, `video_url`)
//! may be shown to a requester. The policy is a pure function; callers look up
//! enrollment themselves and pass the result in.

use crate::roles::is_staff_role;
use crate::types::DbId;

/// Who is making the request.
///
/// Extracted once per request and passed explicitly to every decision that
/// depends on identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requester {
    Anonymous,
    User { user_id: DbId, is_staff: bool },
}

impl Requester {
    /// Build an authenticated requester from a user id and role name.
    pub fn from_role(user_id: DbId, role: &str) -> Self {
        Requester::User {
            user_id,
            is_staff: is_staff_role(role),
        }
    }

    /// The authenticated user id, if any.
    pub fn user_id(&self) -> Option<DbId> {
        match self {
            Requester::Anonymous => None,
            Requester::User { user_id, .. } => Some(*user_id),
        }
    }

    /// Anonymous requesters are never staff.
    pub fn is_staff(&self) -> bool {
        matches!(self, Requester::User { is_staff: true, .. })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Requester::User { .. })
    }
}

/// Outcome of the visibility decision for a single lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonVisibility {
    /// Video source and URL are included in the representation.
    Visible,
    /// Video source and URL are omitted from the representation.
    Redacted,
}

impl LessonVisibility {
    pub fn is_visible(self) -> bool {
        self == LessonVisibility::Visible
    }
}

/// Resolve whether a lesson's media fields are visible to `requester`.
///
/// First match wins:
/// 1. preview lessons are visible to everyone;
/// 2. authenticated requesters enrolled in the lesson's course see them;
/// 3. authenticated staff see them;
/// 4. otherwise the fields are redacted.
///
/// `is_enrolled` is ignored for anonymous requesters.
pub fn resolve_lesson_visibility(
    is_preview: bool,
    requester: &Requester,
    is_enrolled: bool,
) -> LessonVisibility {
    if is_preview {
        return LessonVisibility::Visible;
    }

    match requester {
        Requester::Anonymous => LessonVisibility::Redacted,
        Requester::User { .. } if is_enrolled => LessonVisibility::Visible,
        Requester::User { is_staff: true, .. } => LessonVisibility::Visible,
        Requester::User { .. } => LessonVisibility::Redacted,
    }
}

/// Whether `requester` may see courses that are not published.
pub fn can_view_unpublished(requester: &Requester) -> bool {
    requester.is_staff()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{ROLE_ADMIN, ROLE_STAFF, ROLE_STUDENT};

    fn student() -> Requester {
        Requester::from_role(7, ROLE_STUDENT)
    }

    fn staff() -> Requester {
        Requester::from_role(8, ROLE_STAFF)
    }

    #[test]
    fn preview_lessons_are_visible_to_everyone() {
        for requester in [Requester::Anonymous, student(), staff()] {
            for enrolled in [false, true] {
                assert_eq!(
                    resolve_lesson_visibility(true, &requester, enrolled),
                    LessonVisibility::Visible,
                    "preview must be visible for {requester:?} (enrolled={enrolled})"
                );
            }
        }
    }

    #[test]
    fn anonymous_never_sees_gated_lessons() {
        assert_eq!(
            resolve_lesson_visibility(false, &Requester::Anonymous, false),
            LessonVisibility::Redacted
        );
        // An enrollment flag cannot apply to an anonymous requester.
        assert_eq!(
            resolve_lesson_visibility(false, &Requester::Anonymous, true),
            LessonVisibility::Redacted
        );
    }

    #[test]
    fn enrolled_user_sees_gated_lesson() {
        assert!(resolve_lesson_visibility(false, &student(), true).is_visible());
    }

    #[test]
    fn unenrolled_student_is_redacted() {
        assert!(!resolve_lesson_visibility(false, &student(), false).is_visible());
    }

    #[test]
    fn staff_bypasses_enrollment() {
        assert!(resolve_lesson_visibility(false, &staff(), false).is_visible());
        let admin = Requester::from_role(1, ROLE_ADMIN);
        assert!(resolve_lesson_visibility(false, &admin, false).is_visible());
    }

    #[test]
    fn requester_accessors() {
        assert_eq!(Requester::Anonymous.user_id(), None);
        assert!(!Requester::Anonymous.is_staff());
        assert!(!Requester::Anonymous.is_authenticated());
        assert_eq!(student().user_id(), Some(7));
        assert!(student().is_authenticated());
        assert!(!can_view_unpublished(&student()));
        assert!(can_view_unpublished(&staff()));
    }
}
