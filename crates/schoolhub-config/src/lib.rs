//! # SchoolHub Config
//!
//! Configuration types for the SchoolHub API, loaded from environment variables:
//!
//! - [`jwt`]: token signing configuration (`JWT_SECRET`, `JWT_EXPIRY`)
//! - [`server`]: listener address (`HOST`, `PORT`)
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_config::{JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod jwt;
pub mod server;

use thiserror::Error;

// Re-export commonly used types at crate root
pub use jwt::JwtConfig;
pub use server::ServerConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Reads an optional variable through `lookup`, parsing it when present.
pub(crate) fn parse_var<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
