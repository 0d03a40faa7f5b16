use schoolhub_config::JwtConfig;
use schoolhub_db::PgPool;

/// Shared application state, cloned into every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
}

impl AppState {
    pub fn new(db: PgPool, jwt_config: JwtConfig) -> Self {
        Self { db, jwt_config }
    }
}
