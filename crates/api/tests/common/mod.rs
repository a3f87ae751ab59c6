#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use coursehub_api::auth::jwt::{generate_access_token, JwtConfig};
use coursehub_api::config::{PaymentConfig, ServerConfig};
use coursehub_api::router::build_app_router;
use coursehub_api::state::AppState;
use coursehub_core::catalog::{LESSON_TYPE_VIDEO, LEVEL_BEGINNER, VIDEO_SOURCE_YOUTUBE};
use coursehub_core::payment::{AutoApprove, PaymentError, PaymentGateway, PaymentRequest};
use coursehub_core::types::DbId;
use coursehub_db::models::course::{Course, CreateCourse};
use coursehub_db::models::course_module::CreateCourseModule;
use coursehub_db::models::lesson::{CreateLesson, Lesson};
use coursehub_db::models::status::CourseStatus;
use coursehub_db::models::user::{CreateUser, User};
use coursehub_db::repositories::{CourseModuleRepo, CourseRepo, LessonRepo, UserRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const ROLE_ID_ADMIN: DbId = 1;
pub const ROLE_ID_STAFF: DbId = 2;
pub const ROLE_ID_STUDENT: DbId = 3;

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        password_min_length: 8,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        payment: PaymentConfig::default(),
    }
}

/// Full router with the auto-approving payment gateway.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_payments(pool, Arc::new(AutoApprove))
}

pub fn build_test_app_with_payments(pool: PgPool, payments: Arc<dyn PaymentGateway>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        payments,
    };
    build_app_router(state, &config)
}

/// Gateway that refuses every payment.
pub struct DenyAll;

#[async_trait]
impl PaymentGateway for DenyAll {
    async fn confirm_payment(&self, _request: &PaymentRequest) -> Result<bool, PaymentError> {
        Ok(false)
    }

    fn name(&self) -> &'static str {
        "deny-all"
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    post_json_auth(app, uri, serde_json::json!({}), token).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user without a usable password. Use [`token_for`] to authenticate.
pub async fn create_user(pool: &PgPool, username: &str, role_id: DbId) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "unusable".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            role_id,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Sign an access token the test app will accept.
pub fn token_for(user: &User) -> String {
    let role = match user.role_id {
        ROLE_ID_ADMIN => "admin",
        ROLE_ID_STAFF => "staff",
        _ => "student",
    };
    generate_access_token(user.id, role, &test_config().jwt).unwrap()
}

/// A course with one module holding a preview lesson and a gated lesson.
pub struct SeededCourse {
    pub course: Course,
    pub preview: Lesson,
    pub gated: Lesson,
}

pub async fn seed_course(
    pool: &PgPool,
    instructor_id: DbId,
    title: &str,
    status: CourseStatus,
    price_cents: i64,
) -> SeededCourse {
    let course = CourseRepo::create(
        pool,
        &CreateCourse {
            instructor_id,
            category_id: None,
            title: title.to_string(),
            slug: None,
            description: format!("{title} description"),
            about: String::new(),
            what_will_learn: vec!["Something useful".to_string()],
            requirements: vec![],
            price_cents,
            old_price_cents: None,
            thumbnail: None,
            trailer_url: None,
            status,
            level: LEVEL_BEGINNER.to_string(),
            is_featured: false,
        },
    )
    .await
    .unwrap();

    let module = CourseModuleRepo::create(
        pool,
        &CreateCourseModule {
            course_id: course.id,
            title: "Module 1".to_string(),
            description: String::new(),
            sort_order: 1,
        },
    )
    .await
    .unwrap();

    let preview = LessonRepo::create(pool, &lesson(module.id, "Welcome", true, 1))
        .await
        .unwrap();
    let gated = LessonRepo::create(pool, &lesson(module.id, "Deep dive", false, 2))
        .await
        .unwrap();

    SeededCourse {
        course,
        preview,
        gated,
    }
}

fn lesson(module_id: DbId, title: &str, is_preview: bool, sort_order: i32) -> CreateLesson {
    CreateLesson {
        module_id,
        title: title.to_string(),
        slug: None,
        lesson_type: LESSON_TYPE_VIDEO.to_string(),
        content: String::new(),
        video_source: VIDEO_SOURCE_YOUTUBE.to_string(),
        video_url: Some(format!("https://youtu.be/{sort_order}")),
        duration_secs: Some(600),
        is_preview,
        sort_order,
    }
}
