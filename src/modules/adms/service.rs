use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use schoolhub_core::{AppError, hash_password};

use super::model::{Adm, AdmDto};

const ADM_COLUMNS: &str = "id, name, cpf, birth_date, password";

fn write_error(e: sqlx::Error, cpf: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            warn!(adm.cpf = %cpf, "Attempted to register an existing cpf");
            return AppError::conflict(anyhow!("CPF already registered"));
        }
    }
    error!(error = %e, "Database error writing administrator");
    AppError::database(e)
}

pub struct AdmService;

impl AdmService {
    #[instrument(skip(db, dto), fields(adm.name = %dto.name, db.operation = "INSERT", db.table = "adms"))]
    pub async fn create_adm(db: &PgPool, dto: AdmDto) -> Result<Adm, AppError> {
        debug!("Creating administrator");

        let password = hash_password(&dto.password)?;

        let adm = sqlx::query_as::<_, Adm>(&format!(
            "INSERT INTO adms (name, cpf, birth_date, password) VALUES ($1, $2, $3, $4)
             RETURNING {ADM_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.cpf)
        .bind(dto.birth_date)
        .bind(&password)
        .fetch_one(db)
        .await
        .map_err(|e| write_error(e, &dto.cpf))?;

        info!(adm.id = %adm.id, "Administrator created");
        Ok(adm)
    }

    #[instrument(skip(db, dto), fields(adm.id = %id, db.operation = "UPDATE", db.table = "adms"))]
    pub async fn update_adm(db: &PgPool, id: Uuid, dto: AdmDto) -> Result<Adm, AppError> {
        let password = hash_password(&dto.password)?;

        let adm = sqlx::query_as::<_, Adm>(&format!(
            "UPDATE adms SET name = $1, cpf = $2, birth_date = $3, password = $4
             WHERE id = $5
             RETURNING {ADM_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.cpf)
        .bind(dto.birth_date)
        .bind(&password)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| write_error(e, &dto.cpf))?
        .ok_or_else(|| {
            warn!(adm.id = %id, "Administrator not found for update");
            AppError::not_found(anyhow!("Adm not found"))
        })?;

        info!(adm.id = %adm.id, "Administrator updated");
        Ok(adm)
    }

    #[instrument(skip(db), fields(adm.id = %id, db.operation = "DELETE", db.table = "adms"))]
    pub async fn delete_adm(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM adms WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error deleting administrator");
                AppError::database(e)
            })?;

        if result.rows_affected() == 0 {
            warn!(adm.id = %id, "Administrator not found for deletion");
            return Err(AppError::not_found(anyhow!("Adm not found")));
        }

        info!(adm.id = %id, "Administrator deleted");
        Ok(())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "adms"))]
    pub async fn list_adms(db: &PgPool) -> Result<Vec<Adm>, AppError> {
        let adms = sqlx::query_as::<_, Adm>(&format!(
            "SELECT {ADM_COLUMNS} FROM adms ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing administrators");
            AppError::database(e)
        })?;

        debug!(count = adms.len(), "Administrators fetched");
        Ok(adms)
    }
}
