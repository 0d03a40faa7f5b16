use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

use super::controller::{
    create_student, delete_student, list_students, login_student, update_student,
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/students", post(create_student).get(list_students))
        .route("/students/login", post(login_student))
        .route("/students/{id}", put(update_student).delete(delete_student))
}
