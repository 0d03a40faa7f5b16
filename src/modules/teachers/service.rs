use std::collections::HashMap;

use anyhow::anyhow;
use sqlx::{FromRow, PgConnection, PgPool};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use schoolhub_core::{AppError, hash_password};
use schoolhub_models::School;

use super::model::{Teacher, TeacherDetails, TeacherDto};

const TEACHER_COLUMNS: &str = "id, name, cpf, birth_date, password";

#[derive(FromRow)]
struct SchoolLink {
    teacher_id: Uuid,
    #[sqlx(flatten)]
    school: School,
}

fn write_error(e: sqlx::Error, cpf: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            warn!(teacher.cpf = %cpf, "Attempted to register an existing cpf");
            return AppError::conflict(anyhow!("CPF already registered"));
        }
        if db_err.is_foreign_key_violation() {
            warn!("Teacher linked to an unknown school");
            return AppError::not_found(anyhow!("School not found"));
        }
    }
    error!(error = %e, "Database error writing teacher");
    AppError::database(e)
}

async fn link_school(
    conn: &mut PgConnection,
    teacher_id: Uuid,
    school_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO school_teachers (school_id, teacher_id) VALUES ($1, $2)
         ON CONFLICT DO NOTHING",
    )
    .bind(school_id)
    .bind(teacher_id)
    .execute(conn)
    .await?;
    Ok(())
}

async fn schools_of(conn: &mut PgConnection, teacher_id: Uuid) -> Result<Vec<School>, sqlx::Error> {
    sqlx::query_as::<_, School>(
        "SELECT s.id, s.name, s.street, s.district, s.number
         FROM schools s
         JOIN school_teachers st ON st.school_id = s.id
         WHERE st.teacher_id = $1
         ORDER BY s.name",
    )
    .bind(teacher_id)
    .fetch_all(conn)
    .await
}

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db, dto), fields(teacher.name = %dto.name, db.operation = "INSERT", db.table = "teachers"))]
    pub async fn create_teacher(db: &PgPool, dto: TeacherDto) -> Result<TeacherDetails, AppError> {
        debug!(school.id = ?dto.school_id, "Creating teacher");

        let password = hash_password(&dto.password)?;
        let mut tx = db.begin().await?;

        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "INSERT INTO teachers (name, cpf, birth_date, password) VALUES ($1, $2, $3, $4)
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.cpf)
        .bind(dto.birth_date)
        .bind(&password)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error(e, &dto.cpf))?;

        if let Some(school_id) = dto.school_id {
            link_school(&mut tx, teacher.id, school_id)
                .await
                .map_err(|e| write_error(e, &dto.cpf))?;
        }

        let schools = schools_of(&mut tx, teacher.id).await?;
        tx.commit().await?;

        info!(teacher.id = %teacher.id, schools = schools.len(), "Teacher created");
        Ok(TeacherDetails { teacher, schools })
    }

    /// Replaces the teacher's fields. A supplied `schoolId` is linked in
    /// addition to the schools the teacher already belongs to.
    #[instrument(skip(db, dto), fields(teacher.id = %id, db.operation = "UPDATE", db.table = "teachers"))]
    pub async fn update_teacher(
        db: &PgPool,
        id: Uuid,
        dto: TeacherDto,
    ) -> Result<TeacherDetails, AppError> {
        let password = hash_password(&dto.password)?;
        let mut tx = db.begin().await?;

        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "UPDATE teachers SET name = $1, cpf = $2, birth_date = $3, password = $4
             WHERE id = $5
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.cpf)
        .bind(dto.birth_date)
        .bind(&password)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| write_error(e, &dto.cpf))?
        .ok_or_else(|| {
            warn!(teacher.id = %id, "Teacher not found for update");
            AppError::not_found(anyhow!("Teacher not found"))
        })?;

        if let Some(school_id) = dto.school_id {
            link_school(&mut tx, teacher.id, school_id)
                .await
                .map_err(|e| write_error(e, &dto.cpf))?;
        }

        let schools = schools_of(&mut tx, teacher.id).await?;
        tx.commit().await?;

        info!(teacher.id = %teacher.id, "Teacher updated");
        Ok(TeacherDetails { teacher, schools })
    }

    #[instrument(skip(db), fields(teacher.id = %id, db.operation = "DELETE", db.table = "teachers"))]
    pub async fn delete_teacher(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error deleting teacher");
                AppError::database(e)
            })?;

        if result.rows_affected() == 0 {
            warn!(teacher.id = %id, "Teacher not found for deletion");
            return Err(AppError::not_found(anyhow!("Teacher not found")));
        }

        info!(teacher.id = %id, "Teacher deleted");
        Ok(())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "teachers"))]
    pub async fn list_teachers(db: &PgPool) -> Result<Vec<TeacherDetails>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing teachers");
            AppError::database(e)
        })?;

        let links = sqlx::query_as::<_, SchoolLink>(
            "SELECT st.teacher_id, s.id, s.name, s.street, s.district, s.number
             FROM school_teachers st
             JOIN schools s ON s.id = st.school_id
             ORDER BY s.name",
        )
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing teacher schools");
            AppError::database(e)
        })?;

        let mut schools_by_teacher: HashMap<Uuid, Vec<School>> = HashMap::new();
        for link in links {
            schools_by_teacher
                .entry(link.teacher_id)
                .or_default()
                .push(link.school);
        }

        let details: Vec<TeacherDetails> = teachers
            .into_iter()
            .map(|teacher| TeacherDetails {
                schools: schools_by_teacher.remove(&teacher.id).unwrap_or_default(),
                teacher,
            })
            .collect();

        debug!(count = details.len(), "Teachers fetched");
        Ok(details)
    }
}
