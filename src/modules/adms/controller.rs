use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use schoolhub_core::AppError;
use schoolhub_models::{ErrorResponse, MessageResponse};

use crate::extract::{IdPath, Payload};
use crate::middleware::auth::BasicAuth;
use crate::modules::auth::service::AuthService;
use crate::state::AppState;

use super::model::{Adm, AdmDto, AdmLoginResponse};
use super::service::AdmService;

/// Create an administrator
#[utoipa::path(
    post,
    path = "/adms",
    request_body = AdmDto,
    responses(
        (status = 201, description = "Administrator created", body = Adm),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "CPF already registered", body = ErrorResponse)
    ),
    tag = "Administrators"
)]
#[instrument(skip(state, dto))]
pub async fn create_adm(
    State(state): State<AppState>,
    Payload(dto): Payload<AdmDto>,
) -> Result<(StatusCode, Json<Adm>), AppError> {
    let adm = AdmService::create_adm(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(adm)))
}

/// Replace an administrator
#[utoipa::path(
    put,
    path = "/adms/{id}",
    params(("id" = Uuid, Path, description = "Administrator ID")),
    request_body = AdmDto,
    responses(
        (status = 200, description = "Administrator updated", body = Adm),
        (status = 404, description = "Administrator not found", body = ErrorResponse),
        (status = 409, description = "CPF already registered", body = ErrorResponse)
    ),
    tag = "Administrators"
)]
#[instrument(skip(state, dto))]
pub async fn update_adm(
    State(state): State<AppState>,
    IdPath(id): IdPath<Uuid>,
    Payload(dto): Payload<AdmDto>,
) -> Result<Json<Adm>, AppError> {
    let adm = AdmService::update_adm(&state.db, id, dto).await?;
    Ok(Json(adm))
}

/// Delete an administrator
#[utoipa::path(
    delete,
    path = "/adms/{id}",
    params(("id" = Uuid, Path, description = "Administrator ID")),
    responses(
        (status = 200, description = "Administrator deleted", body = MessageResponse),
        (status = 404, description = "Administrator not found", body = ErrorResponse)
    ),
    tag = "Administrators"
)]
#[instrument(skip(state))]
pub async fn delete_adm(
    State(state): State<AppState>,
    IdPath(id): IdPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    AdmService::delete_adm(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Adm deleted successfully")))
}

/// List administrators
#[utoipa::path(
    get,
    path = "/adms",
    responses(
        (status = 200, description = "All administrators", body = Vec<Adm>)
    ),
    tag = "Administrators"
)]
#[instrument(skip(state))]
pub async fn list_adms(State(state): State<AppState>) -> Result<Json<Vec<Adm>>, AppError> {
    let adms = AdmService::list_adms(&state.db).await?;
    Ok(Json(adms))
}

/// Log in as an administrator
#[utoipa::path(
    post,
    path = "/adm/login",
    responses(
        (status = 200, description = "Login successful", body = AdmLoginResponse),
        (status = 400, description = "Malformed Basic authorization header", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "Administrator not found", body = ErrorResponse)
    ),
    tag = "Administrators",
    security(("basic_auth" = []))
)]
#[instrument(skip(state, credentials))]
pub async fn login_adm(
    State(state): State<AppState>,
    BasicAuth(credentials): BasicAuth,
) -> Result<Json<AdmLoginResponse>, AppError> {
    let (adm, access_token) =
        AuthService::login::<Adm>(&state.db, credentials, &state.jwt_config).await?;
    Ok(Json(AdmLoginResponse { adm, access_token }))
}
