//! Teacher models.
//!
//! Teachers belong to any number of schools through the `school_teachers`
//! link table. Responses expose those links as a `schools` array.

use chrono::NaiveDate;
use schoolhub_core::serde::deserialize_flexible_date;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::principal::Principal;
use crate::schools::School;

/// A teacher as stored in the `teachers` table.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Principal for Teacher {
    const TABLE: &'static str = "teachers";
    const LABEL: &'static str = "Teacher";

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

/// A teacher together with the schools it is linked to.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeacherDetails {
    #[serde(flatten)]
    pub teacher: Teacher,
    pub schools: Vec<School>,
}

/// Body of `POST /teachers` and `PUT /teachers/{id}`.
///
/// `schoolId`, when present, links the teacher to that school. On update the
/// link is added to the existing ones.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TeacherDto {
    pub name: String,
    pub cpf: String,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    #[schema(value_type = String, format = Date, example = "1985-02-01")]
    pub birth_date: NaiveDate,
    pub password: String,
    #[serde(rename = "schoolId", default)]
    pub school_id: Option<Uuid>,
}

/// Response of `POST /teachers`: the new teacher and a ready-to-use token.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateTeacherResponse {
    pub teacher: TeacherDetails,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Successful teacher login.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherLoginResponse {
    pub teacher: Teacher,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
