use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use schoolhub_auth::{BasicCredentials, Claims, verify_token};
use schoolhub_core::AppError;

use crate::state::AppState;

/// Body of every Auth Gate rejection.
pub const ACCESS_DENIED: &str = "Access denied";

fn access_denied() -> AppError {
    AppError::forbidden(ACCESS_DENIED.to_string())
}

/// Claims of the administrator that passed [`require_adm`].
#[derive(Debug, Clone)]
pub struct AuthAdm(pub Claims);

impl<S> FromRequestParts<S> for AuthAdm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthAdm>()
            .cloned()
            .ok_or_else(access_denied)
    }
}

/// Credentials from an `Authorization: Basic` header.
///
/// Rejects with 400 `Invalid authorization type` or
/// `Invalid authorization format`.
#[derive(Debug, Clone)]
pub struct BasicAuth(pub BasicCredentials);

impl<S> FromRequestParts<S> for BasicAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        BasicCredentials::from_header(header)
            .map(BasicAuth)
            .map_err(AppError::bad_request)
    }
}

async fn authorize_adm(state: &AppState, headers: &HeaderMap) -> Result<Claims, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            warn!("Missing or malformed bearer token");
            access_denied()
        })?;

    let claims = verify_token(token.trim(), &state.jwt_config).map_err(|_| {
        warn!("Bearer token failed verification");
        access_denied()
    })?;

    let adm_id = claims.subject_id().ok_or_else(|| {
        warn!(token.sub = %claims.sub, "Token subject is not an id");
        access_denied()
    })?;

    let known: Option<(uuid::Uuid,)> = sqlx::query_as("SELECT id FROM adms WHERE id = $1")
        .bind(adm_id)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, adm.id = %adm_id, "Database error checking administrator");
            access_denied()
        })?;

    if known.is_none() {
        warn!(adm.id = %adm_id, "Token subject is not an administrator");
        return Err(access_denied());
    }

    debug!(adm.id = %adm_id, "Administrator authorized");
    Ok(claims)
}

/// Lets the request through only when it carries a bearer token issued to an
/// existing administrator. Every failure is answered with
/// 403 `{"error":"Access denied"}`.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{middleware, routing::post};
///
/// let gated = post(create_school)
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_adm));
/// ```
pub async fn require_adm(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match authorize_adm(&state, req.headers()).await {
        Ok(claims) => {
            req.extensions_mut().insert(AuthAdm(claims));
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}
