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

use super::model::{Student, StudentDetails, StudentDto, StudentLoginResponse};
use super::service::StudentService;

/// Create a student linked to a school and teachers
#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentDto,
    responses(
        (status = 201, description = "Student created", body = StudentDetails),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "School or teacher not found", body = ErrorResponse),
        (status = 409, description = "CPF already registered", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    Payload(dto): Payload<StudentDto>,
) -> Result<(StatusCode, Json<StudentDetails>), AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Replace a student and its teacher list
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Student updated", body = StudentDetails),
        (status = 404, description = "Student, school or teacher not found", body = ErrorResponse),
        (status = 409, description = "CPF already registered", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    IdPath(id): IdPath<Uuid>,
    Payload(dto): Payload<StudentDto>,
) -> Result<Json<StudentDetails>, AppError> {
    let student = StudentService::update_student(&state.db, id, dto).await?;
    Ok(Json(student))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    IdPath(id): IdPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    StudentService::delete_student(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

/// List students with their school and teachers
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = Vec<StudentDetails>)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentDetails>>, AppError> {
    let students = StudentService::list_students(&state.db).await?;
    Ok(Json(students))
}

/// Log in as a student
#[utoipa::path(
    post,
    path = "/students/login",
    responses(
        (status = 200, description = "Login successful", body = StudentLoginResponse),
        (status = 400, description = "Malformed Basic authorization header", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students",
    security(("basic_auth" = []))
)]
#[instrument(skip(state, credentials))]
pub async fn login_student(
    State(state): State<AppState>,
    BasicAuth(credentials): BasicAuth,
) -> Result<Json<StudentLoginResponse>, AppError> {
    let (student, access_token) =
        AuthService::login::<Student>(&state.db, credentials, &state.jwt_config).await?;
    Ok(Json(StudentLoginResponse {
        student,
        access_token,
    }))
}
