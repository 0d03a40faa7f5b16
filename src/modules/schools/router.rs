use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::auth::require_adm;
use crate::state::AppState;

use super::controller::{create_school, delete_school, list_schools, update_school};

/// Listing is public; every mutation sits behind [`require_adm`].
pub fn init_schools_router(state: &AppState) -> Router<AppState> {
    let adm_only = middleware::from_fn_with_state(state.clone(), require_adm);

    Router::new()
        .route(
            "/schools",
            get(list_schools).merge(post(create_school).route_layer(adm_only.clone())),
        )
        .route(
            "/schools/{id}",
            put(update_school)
                .delete(delete_school)
                .route_layer(adm_only),
        )
}
