use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quillboard_core::assets::AssetError;
use quillboard_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `quillboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An image blob could not be read or written.
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::Core(CoreError::not_found(entity))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Asset storage ---
            AppError::Asset(AssetError::FileMissing(id)) => {
                tracing::error!(image_id = %id, "Image metadata exists but file is missing");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ASSET_MISSING",
                    "Image file is missing from storage".to_string(),
                )
            }
            AppError::Asset(AssetError::Io(err)) => {
                tracing::error!(error = %err, "Asset I/O error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// PostgreSQL error codes raised when a written value does not fit its
/// column: bad text representation, numeric/datetime overflow, not-null,
/// foreign-key and check violations.
const INVALID_VALUE_CODES: &[&str] = &[
    "22P02", "22003", "22007", "22008", "23502", "23503", "23514",
];

/// Client-facing message for a rejected value.
///
/// Constraint violations get a fixed message; their database text names
/// tables and constraints. Type errors keep the database detail.
fn invalid_value_message(code: &str, detail: &str) -> String {
    match code {
        "23503" => "Invalid field value: referenced record not found".to_string(),
        "23502" => "Invalid field value: a required field is missing".to_string(),
        "23514" => "Invalid field value: value is not allowed".to_string(),
        _ => format!("Invalid field value: {detail}"),
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Values rejected by column types or constraints map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            let code = code.as_deref();

            // PostgreSQL unique constraint violation: error code 23505
            if code == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }

            if code.is_some_and(|c| INVALID_VALUE_CODES.contains(&c)) {
                tracing::debug!(error = %db_err, "Rejected field value");
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    invalid_value_message(code.unwrap_or_default(), db_err.message()),
                );
            }

            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
