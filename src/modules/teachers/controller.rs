use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use schoolhub_auth::create_access_token;
use schoolhub_core::AppError;
use schoolhub_models::{ErrorResponse, MessageResponse};

use crate::extract::{IdPath, Payload};
use crate::middleware::auth::BasicAuth;
use crate::modules::auth::service::AuthService;
use crate::state::AppState;

use super::model::{
    CreateTeacherResponse, Teacher, TeacherDetails, TeacherDto, TeacherLoginResponse,
};
use super::service::TeacherService;

/// Create a teacher and issue its first access token
#[utoipa::path(
    post,
    path = "/teachers",
    request_body = TeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = CreateTeacherResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "School not found", body = ErrorResponse),
        (status = 409, description = "CPF already registered", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    Payload(dto): Payload<TeacherDto>,
) -> Result<(StatusCode, Json<CreateTeacherResponse>), AppError> {
    let teacher = TeacherService::create_teacher(&state.db, dto).await?;
    let access_token = create_access_token(
        teacher.teacher.id,
        &teacher.teacher.name,
        &state.jwt_config,
    )?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTeacherResponse {
            teacher,
            access_token,
        }),
    ))
}

/// Replace a teacher, optionally linking one more school
#[utoipa::path(
    put,
    path = "/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = TeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = TeacherDetails),
        (status = 404, description = "Teacher or school not found", body = ErrorResponse),
        (status = 409, description = "CPF already registered", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    IdPath(id): IdPath<Uuid>,
    Payload(dto): Payload<TeacherDto>,
) -> Result<Json<TeacherDetails>, AppError> {
    let teacher = TeacherService::update_teacher(&state.db, id, dto).await?;
    Ok(Json(teacher))
}

/// Delete a teacher
#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    IdPath(id): IdPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    TeacherService::delete_teacher(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Teacher deleted successfully")))
}

/// List teachers with their schools
#[utoipa::path(
    get,
    path = "/teachers",
    responses(
        (status = 200, description = "All teachers", body = Vec<TeacherDetails>)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherDetails>>, AppError> {
    let teachers = TeacherService::list_teachers(&state.db).await?;
    Ok(Json(teachers))
}

/// Log in as a teacher
#[utoipa::path(
    post,
    path = "/teachers/login",
    responses(
        (status = 200, description = "Login successful", body = TeacherLoginResponse),
        (status = 400, description = "Malformed Basic authorization header", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers",
    security(("basic_auth" = []))
)]
#[instrument(skip(state, credentials))]
pub async fn login_teacher(
    State(state): State<AppState>,
    BasicAuth(credentials): BasicAuth,
) -> Result<Json<TeacherLoginResponse>, AppError> {
    let (teacher, access_token) =
        AuthService::login::<Teacher>(&state.db, credentials, &state.jwt_config).await?;
    Ok(Json(TeacherLoginResponse {
        teacher,
        access_token,
    }))
}
