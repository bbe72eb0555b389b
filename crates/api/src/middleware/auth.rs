//! Authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use quillboard_core::error::CoreError;
use quillboard_core::types::UserId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Development-mode header carrying the caller's user id.
pub const DEV_USER_HEADER: &str = "x-user-id";
/// Development-mode header carrying the caller's email.
pub const DEV_EMAIL_HEADER: &str = "x-user-email";

/// The verified caller.
///
/// With `AUTH_JWT_SECRET` configured this comes from a Bearer token in the
/// `Authorization` header. Without it (local development) the
/// `x-user-id` / `x-user-email` headers are trusted instead.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The identity provider's user id (from `claims.sub`).
    pub user_id: UserId,
    /// Display email, when known.
    pub email: Option<String>,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = &state.config.auth;

        let Some(secret) = auth.jwt_secret.as_deref() else {
            let user_id = header(parts, DEV_USER_HEADER)
                .ok_or_else(|| unauthorized("Missing x-user-id header"))?;
            return Ok(AuthUser {
                user_id: user_id.to_string(),
                email: header(parts, DEV_EMAIL_HEADER).map(str::to_string),
            });
        };

        let auth_header = header(parts, "authorization")
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            unauthorized("Invalid Authorization format. Expected: Bearer <token>")
        })?;

        let claims = validate_token(token, secret, auth.jwt_issuer.as_deref())
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        if claims.sub.is_empty() {
            return Err(unauthorized("Token has no subject"));
        }

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}
