use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

use super::controller::{create_adm, delete_adm, list_adms, login_adm, update_adm};

pub fn init_adms_router() -> Router<AppState> {
    Router::new()
        .route("/adms", post(create_adm).get(list_adms))
        .route("/adms/{id}", put(update_adm).delete(delete_adm))
        .route("/adm/login", post(login_adm))
}
