//! Administrator models.
//!
//! Administrators are the only principals allowed to mutate schools.

use chrono::NaiveDate;
use schoolhub_core::serde::deserialize_flexible_date;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::principal::Principal;

/// An administrator as stored in the `adms` table.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Adm {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "12345678900")]
    pub cpf: String,
    pub birth_date: NaiveDate,
    /// bcrypt hash, never serialized.
    #[serde(skip_serializing)]
    pub password: String,
}

impl Principal for Adm {
    const TABLE: &'static str = "adms";
    const LABEL: &'static str = "Adm";

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

/// Body of `POST /adms` and `PUT /adms/{id}`.
///
/// Updates carry the full record; the password is re-hashed every time.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AdmDto {
    pub name: String,
    #[schema(example = "12345678900")]
    pub cpf: String,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    #[schema(value_type = String, format = Date, example = "1990-05-17")]
    pub birth_date: NaiveDate,
    pub password: String,
}

/// Successful administrator login.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdmLoginResponse {
    pub adm: Adm,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_adm() -> Adm {
        Adm {
            id: Uuid::new_v4(),
            name: "Maria Souza".to_string(),
            cpf: "12345678900".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            password: "$2b$10$hash".to_string(),
        }
    }

    #[test]
    fn test_adm_never_serializes_password() {
        let body = serde_json::to_value(sample_adm()).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["birth_date"], "1990-05-17");
    }

    #[test]
    fn test_login_response_uses_access_token_key() {
        let body = serde_json::to_value(AdmLoginResponse {
            adm: sample_adm(),
            access_token: "token".to_string(),
        })
        .unwrap();
        assert_eq!(body["accessToken"], "token");
        assert!(body["adm"].get("password").is_none());
    }

    #[test]
    fn test_dto_accepts_timestamp_birth_date() {
        let dto: AdmDto = serde_json::from_value(serde_json::json!({
            "name": "Maria",
            "cpf": "12345678900",
            "birth_date": "1990-05-17T00:00:00.000Z",
            "password": "secret"
        }))
        .unwrap();
        assert_eq!(dto.birth_date, NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
    }
}
