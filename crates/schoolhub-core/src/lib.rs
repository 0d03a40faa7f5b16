//! # SchoolHub Core
//!
//! Core types, errors, and utilities for the SchoolHub API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_core::errors::AppError;
//! use schoolhub_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Adm not found"));
//!
//! let hash = hash_password("secret")?;
//! assert!(verify_password("secret", &hash));
//! ```

pub mod errors;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
