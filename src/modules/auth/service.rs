use anyhow::anyhow;
use sqlx::{FromRow, PgPool, postgres::PgRow};
use tracing::{debug, error, info, instrument, warn};

use schoolhub_auth::{BasicCredentials, create_access_token};
use schoolhub_config::JwtConfig;
use schoolhub_core::{AppError, verify_password};
use schoolhub_models::Principal;

pub struct AuthService;

impl AuthService {
    /// Checks CPF and password against the role table of `P` and issues an
    /// access token bound to the record id and name.
    ///
    /// Unknown CPF yields 404 `"<Role> not found"`, a wrong password 401
    /// `"Invalid credentials"`.
    #[instrument(skip(db, credentials, jwt_config), fields(db.operation = "SELECT"))]
    pub async fn login<P>(
        db: &PgPool,
        credentials: BasicCredentials,
        jwt_config: &JwtConfig,
    ) -> Result<(P, String), AppError>
    where
        P: Principal + for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        debug!(role = P::LABEL, db.table = P::TABLE, "Looking up principal by cpf");

        let sql = format!("SELECT * FROM {} WHERE cpf = $1", P::TABLE);
        let principal = sqlx::query_as::<_, P>(&sql)
            .bind(&credentials.cpf)
            .fetch_optional(db)
            .await
            .map_err(|e| {
                error!(error = %e, role = P::LABEL, "Database error during login");
                AppError::internal(e)
            })?
            .ok_or_else(|| {
                warn!(role = P::LABEL, "Login attempt for unknown cpf");
                AppError::not_found(anyhow!("{} not found", P::LABEL))
            })?;

        if !verify_password(&credentials.password, principal.password_hash()) {
            warn!(role = P::LABEL, principal.id = %principal.id(), "Login attempt with wrong password");
            return Err(AppError::unauthorized("Invalid credentials".to_string()));
        }

        let access_token = create_access_token(principal.id(), principal.name(), jwt_config)?;

        info!(role = P::LABEL, principal.id = %principal.id(), "Login successful");

        Ok((principal, access_token))
    }
}
