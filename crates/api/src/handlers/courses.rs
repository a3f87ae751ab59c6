//! Handlers for the `/courses` resource: catalog listing, course detail, and
//! enrollment.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use coursehub_core::error::CoreError;
use coursehub_core::types::{DbId, Timestamp};
use coursehub_core::visibility::{can_view_unpublished, Requester};
use coursehub_db::models::category::Category;
use coursehub_db::models::course::{Course, CourseListFilter, CourseListRow};
use coursehub_db::models::enrollment::Enrollment;
use coursehub_db::models::review::ReviewWithAuthor;
use coursehub_db::models::status::CourseStatus;
use coursehub_db::repositories::{
    clamp_limit, clamp_offset, CategoryRepo, CourseModuleRepo, CourseRepo, LessonRepo,
    ReviewRepo, UserRepo,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::learning::enrollment;
use crate::learning::visibility::{find_visible_course, CourseAccess, LessonView};
use crate::middleware::auth::{AuthUser, CurrentRequester};
use crate::query::CourseListParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Category summary embedded in course list items.
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
}

/// One entry of `GET /courses`.
#[derive(Debug, Serialize)]
pub struct CourseListItem {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub price_cents: i64,
    pub old_price_cents: Option<i64>,
    pub thumbnail: Option<String>,
    pub level: String,
    pub category: Option<CategorySummary>,
    pub instructor: String,
    pub status: Option<CourseStatus>,
    pub is_featured: bool,
    pub total_lessons: i64,
}

impl From<CourseListRow> for CourseListItem {
    fn from(row: CourseListRow) -> Self {
        let category = match (row.category_id, row.category_title, row.category_slug) {
            (Some(id), Some(title), Some(slug)) => Some(CategorySummary { id, title, slug }),
            _ => None,
        };
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            price_cents: row.price_cents,
            old_price_cents: row.old_price_cents,
            thumbnail: row.thumbnail,
            level: row.level,
            category,
            instructor: row.instructor_username,
            status: CourseStatus::from_id(row.status_id),
            is_featured: row.is_featured,
            total_lessons: row.total_lessons,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModuleView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub lessons: Vec<LessonView>,
}

/// `GET /courses/{slug}` payload.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub about: String,
    pub what_will_learn: serde_json::Value,
    pub requirements: serde_json::Value,
    pub price_cents: i64,
    pub old_price_cents: Option<i64>,
    pub thumbnail: Option<String>,
    pub trailer_url: Option<String>,
    pub level: String,
    pub status: Option<CourseStatus>,
    pub updated_at: Timestamp,
    pub category: Option<Category>,
    pub instructor: String,
    /// Whether the requester is enrolled; always false for anonymous requesters.
    pub is_enrolled: bool,
    pub modules: Vec<ModuleView>,
    pub reviews: Vec<ReviewWithAuthor>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/courses
///
/// Newest first. Non-staff requesters only see published courses.
pub async fn list_courses(
    State(state): State<AppState>,
    CurrentRequester(requester): CurrentRequester,
    Query(params): Query<CourseListParams>,
) -> AppResult<Json<DataResponse<Vec<CourseListItem>>>> {
    let filter = CourseListFilter {
        include_unpublished: can_view_unpublished(&requester),
        category_slug: params.category,
        limit: clamp_limit(params.limit),
        offset: clamp_offset(params.offset),
    };

    let rows = CourseRepo::list(&state.pool, &filter).await?;
    let items = rows.into_iter().map(CourseListItem::from).collect();
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/courses/{slug}
///
/// Full course tree. Lesson media is filtered per lesson for the requester.
pub async fn get_course(
    State(state): State<AppState>,
    CurrentRequester(requester): CurrentRequester,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<CourseDetail>>> {
    let course = find_visible_course(&state.pool, &requester, &slug).await?;
    let detail = build_course_detail(&state, &requester, course).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/courses/{slug}/enroll
///
/// Returns 201 with the enrollment; 400 `ALREADY_ENROLLED` on a repeat;
/// 402 `PAYMENT_REQUIRED` when payment for a paid course is not confirmed.
pub async fn enroll(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
) -> AppResult<(StatusCode, Json<DataResponse<Enrollment>>)> {
    let course = find_visible_course(&state.pool, &auth_user.requester(), &slug).await?;
    let created =
        enrollment::enroll(&state.pool, state.payments.as_ref(), auth_user.user_id, &course)
            .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn build_course_detail(
    state: &AppState,
    requester: &Requester,
    course: Course,
) -> AppResult<CourseDetail> {
    let pool = &state.pool;

    let category = match course.category_id {
        Some(id) => CategoryRepo::find_by_id(pool, id).await?,
        None => None,
    };
    let instructor = UserRepo::find_by_id(pool, course.instructor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: course.instructor_id,
        }))?;

    let access = CourseAccess::load(pool, requester, course.id).await?;

    let modules = CourseModuleRepo::list_by_course(pool, course.id).await?;
    let mut lessons_by_module: HashMap<DbId, Vec<LessonView>> = HashMap::new();
    for lesson in LessonRepo::list_by_course(pool, course.id).await? {
        lessons_by_module
            .entry(lesson.module_id)
            .or_default()
            .push(access.lesson_view(lesson, requester));
    }

    let modules = modules
        .into_iter()
        .map(|m| ModuleView {
            lessons: lessons_by_module.remove(&m.id).unwrap_or_default(),
            id: m.id,
            title: m.title,
            description: m.description,
            order: m.sort_order,
        })
        .collect();

    let reviews = ReviewRepo::list_for_course(pool, course.id).await?;

    Ok(CourseDetail {
        status: course.status(),
        id: course.id,
        title: course.title,
        slug: course.slug,
        description: course.description,
        about: course.about,
        what_will_learn: course.what_will_learn,
        requirements: course.requirements,
        price_cents: course.price_cents,
        old_price_cents: course.old_price_cents,
        thumbnail: course.thumbnail,
        trailer_url: course.trailer_url,
        level: course.level,
        updated_at: course.updated_at,
        category,
        instructor: instructor.username,
        is_enrolled: access.is_enrolled,
        modules,
        reviews,
    })
}
