use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use schoolhub_core::AppError;

use super::model::{School, SchoolDto};

pub struct SchoolService;

impl SchoolService {
    #[instrument(skip(db, dto), fields(school.name = %dto.name, db.operation = "INSERT", db.table = "schools"))]
    pub async fn create_school(db: &PgPool, dto: SchoolDto) -> Result<School, AppError> {
        debug!(school.district = %dto.district, "Creating new school");

        let school = sqlx::query_as::<_, School>(
            "INSERT INTO schools (name, street, district, number) VALUES ($1, $2, $3, $4)
             RETURNING id, name, street, district, number",
        )
        .bind(&dto.name)
        .bind(&dto.street)
        .bind(&dto.district)
        .bind(&dto.number)
        .fetch_one(db)
        .await
        .map_err(|e| {
            error!(error = %e, school.name = %dto.name, "Database error creating school");
            AppError::database(e)
        })?;

        info!(school.id = %school.id, school.name = %school.name, "School created successfully");
        Ok(school)
    }

    #[instrument(skip(db, dto), fields(school.id = %id, db.operation = "UPDATE", db.table = "schools"))]
    pub async fn update_school(db: &PgPool, id: Uuid, dto: SchoolDto) -> Result<School, AppError> {
        let school = sqlx::query_as::<_, School>(
            "UPDATE schools SET name = $1, street = $2, district = $3, number = $4
             WHERE id = $5
             RETURNING id, name, street, district, number",
        )
        .bind(&dto.name)
        .bind(&dto.street)
        .bind(&dto.district)
        .bind(&dto.number)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error updating school");
            AppError::database(e)
        })?
        .ok_or_else(|| {
            warn!(school.id = %id, "School not found for update");
            AppError::not_found(anyhow!("School not found"))
        })?;

        info!(school.id = %school.id, "School updated successfully");
        Ok(school)
    }

    #[instrument(skip(db), fields(school.id = %id, db.operation = "DELETE", db.table = "schools"))]
    pub async fn delete_school(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM schools WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error deleting school");
                AppError::database(e)
            })?;

        if result.rows_affected() == 0 {
            warn!(school.id = %id, "School not found for deletion");
            return Err(AppError::not_found(anyhow!("School not found")));
        }

        info!(school.id = %id, "School deleted successfully");
        Ok(())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "schools"))]
    pub async fn list_schools(db: &PgPool) -> Result<Vec<School>, AppError> {
        let schools = sqlx::query_as::<_, School>(
            "SELECT id, name, street, district, number FROM schools ORDER BY name",
        )
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching schools");
            AppError::database(e)
        })?;

        debug!(returned = schools.len(), "Schools fetched successfully");
        Ok(schools)
    }
}
