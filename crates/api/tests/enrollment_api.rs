//! HTTP-level tests for `POST /courses/{slug}/enroll`, including paid
//! courses gated by the payment gateway.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, create_user, post_auth, post_json, seed_course, token_for, DenyAll, ROLE_ID_STAFF,
    ROLE_ID_STUDENT,
};
use coursehub_api::learning::enrollment::enroll;
use coursehub_core::payment::AutoApprove;
use coursehub_db::models::status::CourseStatus;
use coursehub_db::repositories::EnrollmentRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enroll_free_course(pool: PgPool) {
    let instructor = create_user(&pool, "instructor1", ROLE_ID_STAFF).await;
    let student = create_user(&pool, "student", ROLE_ID_STUDENT).await;
    let seeded = seed_course(&pool, instructor.id, "Rust", CourseStatus::Published, 0).await;
    let app = common::build_test_app(pool.clone());

    let response = post_auth(app, "/api/v1/courses/rust/enroll", &token_for(&student)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["user_id"], student.id);
    assert_eq!(json["data"]["course_id"], seeded.course.id);
    assert!(EnrollmentRepo::exists(&pool, student.id, seeded.course.id)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enroll_twice_is_already_enrolled(pool: PgPool) {
    let instructor = create_user(&pool, "instructor1", ROLE_ID_STAFF).await;
    let student = create_user(&pool, "student", ROLE_ID_STUDENT).await;
    let token = token_for(&student);
    let seeded = seed_course(&pool, instructor.id, "Rust", CourseStatus::Published, 0).await;
    let app = common::build_test_app(pool.clone());

    let first = post_auth(app.clone(), "/api/v1/courses/rust/enroll", &token).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_auth(app, "/api/v1/courses/rust/enroll", &token).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(second).await["code"], "ALREADY_ENROLLED");

    assert_eq!(
        EnrollmentRepo::count_for(&pool, student.id, seeded.course.id)
            .await
            .unwrap(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enroll_requires_auth(pool: PgPool) {
    let instructor = create_user(&pool, "instructor1", ROLE_ID_STAFF).await;
    seed_course(&pool, instructor.id, "Rust", CourseStatus::Published, 0).await;
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/courses/rust/enroll", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_paid_course_auto_approved_by_default(pool: PgPool) {
    let instructor = create_user(&pool, "instructor1", ROLE_ID_STAFF).await;
    let student = create_user(&pool, "student", ROLE_ID_STUDENT).await;
    seed_course(&pool, instructor.id, "Premium", CourseStatus::Published, 4900).await;
    let app = common::build_test_app(pool);

    let response = post_auth(app, "/api/v1/courses/premium/enroll", &token_for(&student)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_paid_course_refused_payment_is_402(pool: PgPool) {
    let instructor = create_user(&pool, "instructor1", ROLE_ID_STAFF).await;
    let student = create_user(&pool, "student", ROLE_ID_STUDENT).await;
    let seeded = seed_course(&pool, instructor.id, "Premium", CourseStatus::Published, 4900).await;
    seed_course(&pool, instructor.id, "Free", CourseStatus::Published, 0).await;
    let app = common::build_test_app_with_payments(pool.clone(), Arc::new(DenyAll));
    let token = token_for(&student);

    let response = post_auth(app.clone(), "/api/v1/courses/premium/enroll", &token).await;
    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body_json(response).await["code"], "PAYMENT_REQUIRED");
    assert!(!EnrollmentRepo::exists(&pool, student.id, seeded.course.id)
        .await
        .unwrap());

    // Free courses never consult the gateway.
    let response = post_auth(app, "/api/v1/courses/free/enroll", &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draft_course_not_enrollable_by_student(pool: PgPool) {
    let instructor = create_user(&pool, "instructor1", ROLE_ID_STAFF).await;
    let student = create_user(&pool, "student", ROLE_ID_STUDENT).await;
    seed_course(&pool, instructor.id, "Soon", CourseStatus::Draft, 0).await;
    let app = common::build_test_app(pool);

    let response = post_auth(app.clone(), "/api/v1/courses/soon/enroll", &token_for(&student)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_auth(app, "/api/v1/courses/soon/enroll", &token_for(&instructor)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_enroll_creates_one_row(pool: PgPool) {
    let instructor = create_user(&pool, "instructor1", ROLE_ID_STAFF).await;
    let student = create_user(&pool, "student", ROLE_ID_STUDENT).await;
    let seeded = seed_course(&pool, instructor.id, "Rust", CourseStatus::Published, 0).await;

    let (a, b) = tokio::join!(
        enroll(&pool, &AutoApprove, student.id, &seeded.course),
        enroll(&pool, &AutoApprove, student.id, &seeded.course),
    );
    assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
    assert_eq!(
        EnrollmentRepo::count_for(&pool, student.id, seeded.course.id)
            .await
            .unwrap(),
        1
    );
}
