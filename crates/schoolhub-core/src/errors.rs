//! Application error type shared by every layer of the API.
//!
//! [`AppError`] pairs an HTTP status with an [`anyhow::Error`]. Client errors
//! (4xx) render their message as `{"error": "..."}`. Server errors (5xx) are
//! logged in full and rendered with a generic message so database details
//! never reach the caller.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned to clients for every 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn internal_error(message: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow::anyhow!(message))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(message))
    }

    pub fn forbidden(message: String) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow::anyhow!(message))
    }

    /// Classifies a database error.
    ///
    /// - unique violation → 409
    /// - foreign key violation → 404 (the referenced row does not exist)
    /// - `RowNotFound` → 404
    /// - anything else → 500
    pub fn database(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::not_found(anyhow::anyhow!("Record not found")),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::conflict(anyhow::anyhow!("Record already exists"))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Self::not_found(anyhow::anyhow!("Referenced record not found"))
            }
            _ => Self::internal(err),
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.error.to_string()
        };

        (self.status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        let err: Error = err.into();
        match err.downcast::<sqlx::Error>() {
            Ok(db_err) => AppError::database(db_err),
            Err(err) => AppError::internal(err),
        }
    }
}
