//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use coursehub_core::visibility::Requester;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (e.g. `"admin"`, `"student"`).
    pub role: String,
}

impl AuthUser {
    pub fn requester(&self) -> Requester {
        Requester::from_role(self.user_id, &self.role)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        bearer_user(parts, state)?.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })
    }
}

/// The requester for endpoints that serve both anonymous and signed-in users.
///
/// No `Authorization` header yields [`Requester::Anonymous`]. A header that is
/// present but malformed, expired, or forged is rejected with 401 rather than
/// silently downgraded.
#[derive(Debug, Clone)]
pub struct CurrentRequester(pub Requester);

impl FromRequestParts<AppState> for CurrentRequester {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let requester = match bearer_user(parts, state)? {
            Some(user) => user.requester(),
            None => Requester::Anonymous,
        };
        Ok(CurrentRequester(requester))
    }
}

/// Decode the bearer token, if any. `Ok(None)` when no header was sent.
fn bearer_user(parts: &Parts, state: &AppState) -> Result<Option<AuthUser>, AppError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

    let claims = validate_token(token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    Ok(Some(AuthUser {
        user_id: claims.sub,
        role: claims.role,
    }))
}
