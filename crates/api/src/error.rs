use adforge_core::error::CoreError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error returned by every handler.
///
/// Domain failures arrive as [`CoreError`]; storage and upload failures have
/// their own variants. All of them render as `{ "error", "code" }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An upload over `MAX_UPLOAD_BYTES` or over the request body limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Logged in full; the client only sees a generic message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Friendlier wording for unique constraints users can actually hit.
const UNIQUE_MESSAGES: &[(&str, &str)] = &[
    ("uq_clients_name", "A client with this name already exists"),
    ("uq_users_email", "An account with this email already exists"),
];

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl From<MultipartError> for AppError {
    /// A body cut off by the request size limit is a 413, not a malformed form.
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge("Upload exceeds the maximum request size".into())
        } else {
            AppError::BadRequest(err.body_text())
        }
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        (status, Json(ErrorBody { error, code })).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

fn core_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal()
        }
    }
}

/// Map constraint violations by their naming convention (`uq_`, `fk_`,
/// `ck_`); anything else is a sanitized 500.
fn database_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    let db_err = match err {
        sqlx::Error::RowNotFound => {
            return (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            )
        }
        sqlx::Error::Database(db_err) => db_err,
        other => {
            tracing::error!(error = %other, "Database error");
            return internal();
        }
    };

    let constraint = db_err.constraint().unwrap_or_default();
    match (db_err.code().as_deref(), constraint) {
        (Some("23505"), c) if c.starts_with("uq_") => {
            let message = UNIQUE_MESSAGES
                .iter()
                .find(|(name, _)| *name == c)
                .map_or_else(
                    || format!("Duplicate value violates unique constraint: {c}"),
                    |(_, msg)| msg.to_string(),
                );
            (StatusCode::CONFLICT, "CONFLICT", message)
        }
        (Some("23503"), c) if c.starts_with("fk_") => (
            StatusCode::BAD_REQUEST,
            "INVALID_REFERENCE",
            format!("Referenced record does not exist: {c}"),
        ),
        (Some("23514"), c) if c.starts_with("ck_") => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!("Value rejected by constraint: {c}"),
        ),
        _ => {
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
    }
}
