use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A school in the system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, PartialEq, Eq)]
pub struct School {
    pub id: Uuid,
    pub name: String,
    pub street: String,
    pub district: String,
    /// Building number, kept as free text ("12A", "s/n").
    pub number: String,
}

/// Body of `POST /schools` and `PUT /schools/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SchoolDto {
    #[schema(example = "Escola Estadual Central")]
    pub name: String,
    pub street: String,
    pub district: String,
    #[schema(example = "120")]
    pub number: String,
}
