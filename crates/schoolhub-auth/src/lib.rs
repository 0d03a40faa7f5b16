//! # SchoolHub Auth
//!
//! Authentication primitives for the SchoolHub API:
//!
//! - [`claims`]: JWT claim structure
//! - [`jwt`]: access token creation and verification
//! - [`basic`]: parsing of `Authorization: Basic <base64(cpf:password)>` headers
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_auth::{create_access_token, verify_token, BasicCredentials};
//!
//! let credentials = BasicCredentials::from_header(header_value)?;
//! let token = create_access_token(adm.id, &adm.name, &jwt_config)?;
//! let claims = verify_token(&token, &jwt_config)?;
//! assert_eq!(claims.sub, adm.id.to_string());
//! ```

pub mod basic;
pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use basic::{BasicAuthError, BasicCredentials};
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
