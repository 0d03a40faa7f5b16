//! Student models.
//!
//! A student optionally belongs to one school (`fk_school_id`) and is linked
//! to any number of teachers through `teacher_students`.

use chrono::NaiveDate;
use schoolhub_core::serde::deserialize_flexible_date;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::principal::Principal;
use crate::schools::School;
use crate::teachers::Teacher;

/// A student as stored in the `students` table.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub fk_school_id: Option<Uuid>,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Principal for Student {
    const TABLE: &'static str = "students";
    const LABEL: &'static str = "Student";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn password_hash(&self) -> &str {
        &self.password
    }
}

/// A student with its school and teachers resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentDetails {
    #[serde(flatten)]
    pub student: Student,
    pub school: Option<School>,
    #[serde(rename = "teacherIds")]
    pub teacher_ids: Vec<Uuid>,
    pub teachers: Vec<Teacher>,
}

/// Body of `POST /students` and `PUT /students/{id}`.
///
/// On update `teacherIds` replaces every existing teacher link.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StudentDto {
    pub name: String,
    pub cpf: String,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    #[schema(value_type = String, format = Date, example = "2008-09-30")]
    pub birth_date: NaiveDate,
    pub password: String,
    #[serde(default)]
    pub fk_school_id: Option<Uuid>,
    #[serde(rename = "teacherIds", default)]
    pub teacher_ids: Vec<Uuid>,
}

/// Successful student login.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentLoginResponse {
    pub student: Student,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
