//! Parsing of HTTP Basic credentials used by the login endpoints.
//!
//! The header has the form `Basic <base64(cpf:password)>`. The decoded
//! payload is split on the first `:`, so the password may itself contain
//! colons.

use data_encoding::{BASE64, BASE64_NOPAD};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BasicAuthError {
    /// Header absent or not using the `Basic` scheme.
    #[error("Invalid authorization type")]
    InvalidType,
    /// Payload is not base64 `cpf:password` with both parts present.
    #[error("Invalid authorization format")]
    InvalidFormat,
}

#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub cpf: String,
    pub password: String,
}

// Keeps the password out of logs.
impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("cpf", &self.cpf)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl BasicCredentials {
    pub fn from_header(header: Option<&str>) -> Result<Self, BasicAuthError> {
        let header = header.ok_or(BasicAuthError::InvalidType)?;
        let (scheme, payload) = header.split_once(' ').unwrap_or((header, ""));

        if scheme != "Basic" {
            return Err(BasicAuthError::InvalidType);
        }

        let payload = payload.trim().as_bytes();
        let decoded = BASE64
            .decode(payload)
            .or_else(|_| BASE64_NOPAD.decode(payload))
            .map_err(|_| BasicAuthError::InvalidFormat)?;
        let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidFormat)?;

        let (cpf, password) = decoded
            .split_once(':')
            .ok_or(BasicAuthError::InvalidFormat)?;

        if cpf.is_empty() || password.is_empty() {
            return Err(BasicAuthError::InvalidFormat);
        }

        Ok(Self {
            cpf: cpf.to_string(),
            password: password.to_string(),
        })
    }

    /// Builds the header value for these credentials.
    pub fn to_header(&self) -> String {
        let payload = format!("{}:{}", self.cpf, self.password);
        format!("Basic {}", BASE64.encode(payload.as_bytes()))
    }
}
