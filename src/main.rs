use dotenvy::dotenv;
use tracing::info;

use schoolhub::logging::init_tracing;
use schoolhub::router::init_router;
use schoolhub::state::AppState;
use schoolhub_config::{JwtConfig, ServerConfig};
use schoolhub_db::{init_db_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let jwt_config = JwtConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;

    let db = init_db_pool().await?;
    run_migrations(&db).await?;

    let app = init_router(AppState::new(db, jwt_config));

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await?;
    Ok(())
}
