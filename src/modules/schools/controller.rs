use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::{info, instrument};
use uuid::Uuid;

use schoolhub_core::AppError;
use schoolhub_models::{ErrorResponse, MessageResponse};

use crate::extract::{IdPath, Payload};
use crate::middleware::auth::AuthAdm;
use crate::state::AppState;

use super::model::{School, SchoolDto};
use super::service::SchoolService;

#[utoipa::path(
    post,
    path = "/schools",
    request_body = SchoolDto,
    responses(
        (status = 201, description = "School created successfully", body = School),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 403, description = "Access denied - administrator token required", body = ErrorResponse)
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_adm, dto))]
pub async fn create_school(
    State(state): State<AppState>,
    auth_adm: AuthAdm,
    Payload(dto): Payload<SchoolDto>,
) -> Result<(StatusCode, Json<School>), AppError> {
    info!(adm.id = %auth_adm.0.sub, "Administrator creating school");
    let school = SchoolService::create_school(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(school)))
}

#[utoipa::path(
    put,
    path = "/schools/{id}",
    params(("id" = Uuid, Path, description = "School ID")),
    request_body = SchoolDto,
    responses(
        (status = 200, description = "School updated successfully", body = School),
        (status = 403, description = "Access denied - administrator token required", body = ErrorResponse),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_adm, dto))]
pub async fn update_school(
    State(state): State<AppState>,
    auth_adm: AuthAdm,
    IdPath(id): IdPath<Uuid>,
    Payload(dto): Payload<SchoolDto>,
) -> Result<Json<School>, AppError> {
    info!(adm.id = %auth_adm.0.sub, "Administrator updating school");
    let school = SchoolService::update_school(&state.db, id, dto).await?;
    Ok(Json(school))
}

#[utoipa::path(
    delete,
    path = "/schools/{id}",
    params(("id" = Uuid, Path, description = "School ID")),
    responses(
        (status = 200, description = "School deleted successfully", body = MessageResponse),
        (status = 403, description = "Access denied - administrator token required", body = ErrorResponse),
        (status = 404, description = "School not found", body = ErrorResponse)
    ),
    tag = "Schools",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_adm))]
pub async fn delete_school(
    State(state): State<AppState>,
    auth_adm: AuthAdm,
    IdPath(id): IdPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    info!(adm.id = %auth_adm.0.sub, "Administrator deleting school");
    SchoolService::delete_school(&state.db, id).await?;
    Ok(Json(MessageResponse::new("School deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/schools",
    responses(
        (status = 200, description = "All schools", body = Vec<School>)
    ),
    tag = "Schools"
)]
#[instrument(skip(state))]
pub async fn list_schools(State(state): State<AppState>) -> Result<Json<Vec<School>>, AppError> {
    let schools = SchoolService::list_schools(&state.db).await?;
    Ok(Json(schools))
}
