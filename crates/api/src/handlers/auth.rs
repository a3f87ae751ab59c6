//! Handlers for the `/auth` resource (register, login, refresh, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use coursehub_core::error::CoreError;
use coursehub_core::roles::DEFAULT_SIGNUP_ROLE;
use coursehub_db::models::session::CreateSession;
use coursehub_db::models::user::{CreateUser, User, UserResponse};
use coursehub_db::repositories::{RoleRepo, SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Consecutive failed logins before the account is locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;

const LOCK_DURATION_MINS: i64 = 15;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 150))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 150))]
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a student account. Returns 201 with the public user.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password, state.config.password_min_length)?;

    let username = input.username.trim().to_string();
    let email = input.email.trim().to_string();

    if UserRepo::find_by_username(&state.pool, &username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username is already taken".into(),
        )));
    }
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already in use".into(),
        )));
    }

    let role = RoleRepo::find_by_name(&state.pool, DEFAULT_SIGNUP_ROLE)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Role '{DEFAULT_SIGNUP_ROLE}' is not seeded"
            )))
        })?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // A concurrent registration can still trip uq_users_*; that surfaces as 409.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username,
            email,
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from_user(user, role.name),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let invalid_credentials =
        || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    if user.locked_until.is_some_and(|until| until > Utc::now()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is temporarily locked. Try again later.".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        UserRepo::increment_failed_login(&state.pool, user.id).await?;

        if user.failed_login_count + 1 >= MAX_FAILED_ATTEMPTS {
            let until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, until).await?;
            tracing::warn!(user_id = user.id, "Account locked after repeated failed logins");
        }

        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let response = issue_tokens(&state, user).await?;
    Ok(Json(DataResponse { data: response }))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a refresh token for a new token pair. Each refresh token is
/// single-use; replaying it, even concurrently, is 401.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::redeem_refresh_token(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let response = issue_tokens(&state, user).await?;
    Ok(Json(DataResponse { data: response }))
}

/// POST /api/v1/auth/logout
///
/// Revoke every session of the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::debug!(user_id = auth_user.user_id, revoked, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok(Json(DataResponse {
        data: UserResponse::from_user(user, role),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sign an access token, persist a new refresh session, and build the response.
async fn issue_tokens(state: &AppState, user: User) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    let access_token = generate_access_token(user.id, &role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_token, refresh_token_hash) = generate_refresh_token();
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash,
            expires_at: Utc::now() + chrono::Duration::days(jwt.refresh_token_expiry_days),
            user_agent: None,
            ip_address: None,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: jwt.access_token_ttl_secs(),
        user: UserResponse::from_user(user, role),
    })
}
