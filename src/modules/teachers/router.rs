use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

use super::controller::{
    create_teacher, delete_teacher, list_teachers, login_teacher, update_teacher,
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/teachers", post(create_teacher).get(list_teachers))
        .route("/teachers/login", post(login_teacher))
        .route("/teachers/{id}", put(update_teacher).delete(delete_teacher))
}
