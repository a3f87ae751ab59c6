//! Course access and lesson representation for a given requester.

use std::collections::HashSet;

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use coursehub_core::visibility::{can_view_unpublished, resolve_lesson_visibility, Requester};
use coursehub_db::models::course::Course;
use coursehub_db::models::lesson::Lesson;
use coursehub_db::repositories::{CourseRepo, EnrollmentRepo, LessonProgressRepo};
use coursehub_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Restricted lesson fields, present only when the policy allows.
#[derive(Debug, Clone, Serialize)]
pub struct LessonMedia {
    pub video_source: String,
    pub video_url: Option<String>,
}

/// Lesson as returned inside a course detail.
///
/// When media is redacted the `video_source` and `video_url` keys are absent
/// from the JSON, not null.
#[derive(Debug, Clone, Serialize)]
pub struct LessonView {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub lesson_type: String,
    pub duration: Option<i32>,
    pub is_preview: bool,
    pub order: i32,
    pub is_completed: bool,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub media: Option<LessonMedia>,
}

impl LessonView {
    pub fn build(
        lesson: Lesson,
        requester: &Requester,
        is_enrolled: bool,
        is_completed: bool,
    ) -> Self {
        let visible = resolve_lesson_visibility(lesson.is_preview, requester, is_enrolled);
        let media = visible.is_visible().then(|| LessonMedia {
            video_source: lesson.video_source,
            video_url: lesson.video_url,
        });

        Self {
            id: lesson.id,
            title: lesson.title,
            slug: lesson.slug,
            lesson_type: lesson.lesson_type,
            duration: lesson.duration_secs,
            is_preview: lesson.is_preview,
            order: lesson.sort_order,
            is_completed,
            media,
        }
    }
}

/// Per-request facts about a requester and one course, fetched once and then
/// applied to every lesson of that course.
#[derive(Debug, Default)]
pub struct CourseAccess {
    pub is_enrolled: bool,
    pub completed: HashSet<DbId>,
}

impl CourseAccess {
    pub async fn load(pool: &DbPool, requester: &Requester, course_id: DbId) -> AppResult<Self> {
        let Some(user_id) = requester.user_id() else {
            return Ok(Self::default());
        };

        let is_enrolled = EnrollmentRepo::exists(pool, user_id, course_id).await?;
        let completed =
            LessonProgressRepo::completed_lesson_ids_for_course(pool, user_id, course_id)
                .await?
                .into_iter()
                .collect();

        Ok(Self {
            is_enrolled,
            completed,
        })
    }

    pub fn lesson_view(&self, lesson: Lesson, requester: &Requester) -> LessonView {
        let is_completed = self.completed.contains(&lesson.id);
        LessonView::build(lesson, requester, self.is_enrolled, is_completed)
    }
}

/// Load a course by slug, treating unpublished courses as missing for
/// requesters who may not see them.
pub async fn find_visible_course(
    pool: &DbPool,
    requester: &Requester,
    slug: &str,
) -> AppResult<Course> {
    let not_found = || {
        AppError::Core(CoreError::NotFoundBySlug {
            entity: "Course",
            slug: slug.to_string(),
        })
    };

    let course = CourseRepo::find_by_slug(pool, slug)
        .await?
        .ok_or_else(not_found)?;

    if !course.is_published() && !can_view_unpublished(requester) {
        return Err(not_found());
    }
    Ok(course)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use coursehub_core::roles::{ROLE_STAFF, ROLE_STUDENT};

    use super::*;

    fn lesson(is_preview: bool) -> Lesson {
        Lesson {
            id: 10,
            module_id: 1,
            title: "Borrowing".to_string(),
            slug: "borrowing".to_string(),
            lesson_type: "video".to_string(),
            content: String::new(),
            video_source: "youtube".to_string(),
            video_url: Some("https://youtu.be/xyz".to_string()),
            duration_secs: Some(300),
            is_preview,
            sort_order: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn redacted_lesson_omits_media_keys() {
        let view = LessonView::build(lesson(false), &Requester::Anonymous, false, false);
        let json = serde_json::to_value(&view).unwrap();

        assert!(json.get("video_source").is_none());
        assert!(json.get("video_url").is_none());
        assert_eq!(json["order"], 2);
        assert_eq!(json["duration"], 300);
    }

    #[test]
    fn preview_lesson_exposes_media_to_anonymous() {
        let view = LessonView::build(lesson(true), &Requester::Anonymous, false, false);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["video_source"], "youtube");
        assert_eq!(json["video_url"], "https://youtu.be/xyz");
    }

    #[test]
    fn visible_lesson_keeps_null_url_key() {
        let mut gated = lesson(false);
        gated.video_url = None;
        let staff = Requester::from_role(3, ROLE_STAFF);
        let json = serde_json::to_value(LessonView::build(gated, &staff, false, false)).unwrap();

        assert!(json.get("video_url").is_some_and(|v| v.is_null()));
        assert_eq!(json["video_source"], "youtube");
    }

    #[test]
    fn course_access_marks_completed_lessons() {
        let access = CourseAccess {
            is_enrolled: true,
            completed: HashSet::from([10]),
        };
        let student = Requester::from_role(4, ROLE_STUDENT);
        let view = access.lesson_view(lesson(false), &student);

        assert!(view.is_completed);
        assert!(view.media.is_some());
    }
}
