//! Request body extraction.
//!
//! [`Payload`] accepts `application/json`, `application/x-www-form-urlencoded`
//! and `text/plain` bodies. Anything that is not a form is parsed as JSON,
//! which also covers clients that omit the content type. Form bodies may
//! repeat a key to send a list, e.g. `teacherIds=a&teacherIds=b`.
//!
//! [`IdPath`] wraps axum's `Path` so a malformed id answers with the usual
//! JSON error body.

use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
};
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;
use tracing::debug;

use schoolhub_core::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

fn is_form(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .starts_with("application/x-www-form-urlencoded")
}

fn describe_json_error(err: &serde_json::Error) -> AppError {
    let message = err.to_string();

    if message.contains("missing field") {
        let field = message
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if message.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    if message.contains("invalid date") {
        return AppError::bad_request(anyhow!("Invalid birth_date"));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_form);

        if form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    AppError::bad_request(anyhow!("Invalid form body: {}", rejection))
                })?;
            return Ok(Payload(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(anyhow!("{}", rejection.body_text())))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| describe_json_error(&e))?;
        Ok(Payload(value))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(error = %rejection.body_text(), "Rejected path parameter");
                AppError::bad_request(anyhow!("Invalid id"))
            })?;
        Ok(IdPath(value))
    }
}
