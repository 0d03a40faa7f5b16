use std::collections::HashMap;

use anyhow::anyhow;
use sqlx::{FromRow, PgConnection, PgPool};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use schoolhub_core::{AppError, hash_password};
use schoolhub_models::{School, Teacher};

use super::model::{Student, StudentDetails, StudentDto};

const STUDENT_COLUMNS: &str = "id, name, cpf, birth_date, fk_school_id, password";

#[derive(FromRow)]
struct TeacherLink {
    student_id: Uuid,
    #[sqlx(flatten)]
    teacher: Teacher,
}

fn write_error(e: sqlx::Error, cpf: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            warn!(student.cpf = %cpf, "Attempted to register an existing cpf");
            return AppError::conflict(anyhow!("CPF already registered"));
        }
        if db_err.is_foreign_key_violation() {
            warn!("Student references an unknown school or teacher");
            return AppError::not_found(anyhow!("Referenced school or teacher not found"));
        }
    }
    error!(error = %e, "Database error writing student");
    AppError::database(e)
}

/// Links the student to exactly `teacher_ids`. Duplicates are ignored.
async fn link_teachers(
    conn: &mut PgConnection,
    student_id: Uuid,
    teacher_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    let mut ids = teacher_ids.to_vec();
    ids.sort();
    ids.dedup();

    if ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO teacher_students (teacher_id, student_id)
         SELECT UNNEST($1::uuid[]), $2",
    )
    .bind(&ids)
    .bind(student_id)
    .execute(conn)
    .await?;
    Ok(())
}

async fn load_details(
    conn: &mut PgConnection,
    student: Student,
) -> Result<StudentDetails, sqlx::Error> {
    let school = match student.fk_school_id {
        Some(school_id) => {
            sqlx::query_as::<_, School>(
                "SELECT id, name, street, district, number FROM schools WHERE id = $1",
            )
            .bind(school_id)
            .fetch_optional(&mut *conn)
            .await?
        }
        None => None,
    };

    let teachers = sqlx::query_as::<_, Teacher>(
        "SELECT t.id, t.name, t.cpf, t.birth_date, t.password
         FROM teachers t
         JOIN teacher_students ts ON ts.teacher_id = t.id
         WHERE ts.student_id = $1
         ORDER BY t.name",
    )
    .bind(student.id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(StudentDetails {
        teacher_ids: teachers.iter().map(|t| t.id).collect(),
        school,
        teachers,
        student,
    })
}

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto), fields(student.name = %dto.name, db.operation = "INSERT", db.table = "students"))]
    pub async fn create_student(db: &PgPool, dto: StudentDto) -> Result<StudentDetails, AppError> {
        debug!(
            school.id = ?dto.fk_school_id,
            teachers = dto.teacher_ids.len(),
            "Creating student"
        );

        let password = hash_password(&dto.password)?;
        let mut tx = db.begin().await?;

        let student = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, cpf, birth_date, password, fk_school_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.cpf)
        .bind(dto.birth_date)
        .bind(&password)
        .bind(dto.fk_school_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error(e, &dto.cpf))?;

        link_teachers(&mut tx, student.id, &dto.teacher_ids)
            .await
            .map_err(|e| write_error(e, &dto.cpf))?;

        let details = load_details(&mut tx, student).await?;
        tx.commit().await?;

        info!(student.id = %details.student.id, "Student created");
        Ok(details)
    }

    /// Replaces the student's fields and its whole teacher list.
    #[instrument(skip(db, dto), fields(student.id = %id, db.operation = "UPDATE", db.table = "students"))]
    pub async fn update_student(
        db: &PgPool,
        id: Uuid,
        dto: StudentDto,
    ) -> Result<StudentDetails, AppError> {
        let password = hash_password(&dto.password)?;
        let mut tx = db.begin().await?;

        let student = sqlx::query_as::<_, Student>(&format!(
            "UPDATE students
             SET name = $1, cpf = $2, birth_date = $3, password = $4, fk_school_id = $5
             WHERE id = $6
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.cpf)
        .bind(dto.birth_date)
        .bind(&password)
        .bind(dto.fk_school_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| write_error(e, &dto.cpf))?
        .ok_or_else(|| {
            warn!(student.id = %id, "Student not found for update");
            AppError::not_found(anyhow!("Student not found"))
        })?;

        sqlx::query("DELETE FROM teacher_students WHERE student_id = $1")
            .bind(student.id)
            .execute(&mut *tx)
            .await?;

        link_teachers(&mut tx, student.id, &dto.teacher_ids)
            .await
            .map_err(|e| write_error(e, &dto.cpf))?;

        let details = load_details(&mut tx, student).await?;
        tx.commit().await?;

        info!(
            student.id = %details.student.id,
            teachers = details.teacher_ids.len(),
            "Student updated"
        );
        Ok(details)
    }

    #[instrument(skip(db), fields(student.id = %id, db.operation = "DELETE", db.table = "students"))]
    pub async fn delete_student(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error deleting student");
                AppError::database(e)
            })?;

        if result.rows_affected() == 0 {
            warn!(student.id = %id, "Student not found for deletion");
            return Err(AppError::not_found(anyhow!("Student not found")));
        }

        info!(student.id = %id, "Student deleted");
        Ok(())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "students"))]
    pub async fn list_students(db: &PgPool) -> Result<Vec<StudentDetails>, AppError> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing students");
            AppError::database(e)
        })?;

        let schools: HashMap<Uuid, School> = sqlx::query_as::<_, School>(
            "SELECT id, name, street, district, number FROM schools",
        )
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing schools for students");
            AppError::database(e)
        })?
        .into_iter()
        .map(|school| (school.id, school))
        .collect();

        let links = sqlx::query_as::<_, TeacherLink>(
            "SELECT ts.student_id, t.id, t.name, t.cpf, t.birth_date, t.password
             FROM teacher_students ts
             JOIN teachers t ON t.id = ts.teacher_id
             ORDER BY t.name",
        )
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing student teachers");
            AppError::database(e)
        })?;

        let mut teachers_by_student: HashMap<Uuid, Vec<Teacher>> = HashMap::new();
        for link in links {
            teachers_by_student
                .entry(link.student_id)
                .or_default()
                .push(link.teacher);
        }

        let details: Vec<StudentDetails> = students
            .into_iter()
            .map(|student| {
                let teachers = teachers_by_student.remove(&student.id).unwrap_or_default();
                StudentDetails {
                    school: student
                        .fk_school_id
                        .and_then(|school_id| schools.get(&school_id).cloned()),
                    teacher_ids: teachers.iter().map(|t| t.id).collect(),
                    teachers,
                    student,
                }
            })
            .collect();

        debug!(count = details.len(), "Students fetched");
        Ok(details)
    }
}
