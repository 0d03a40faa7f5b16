//! Feature modules.
//!
//! Each entity module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers and OpenAPI annotations
//! - `service.rs`: SQL and business rules
//! - `model.rs`: records and DTOs re-exported from `schoolhub-models`
//! - `router.rs`: route table
//!
//! [`auth`] holds the login flow shared by the three user roles.

pub mod adms;
pub mod auth;
pub mod schools;
pub mod students;
pub mod teachers;
