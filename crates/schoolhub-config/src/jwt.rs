use std::env;

use crate::{ConfigError, parse_var};

/// Tokens stay valid for seven days unless `JWT_EXPIRY` says otherwise.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 7 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of an access token in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    /// Loads the signing configuration. A missing or empty `JWT_SECRET` is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let token_expiry = parse_var(&lookup, "JWT_EXPIRY", DEFAULT_TOKEN_EXPIRY)?;

        Ok(Self {
            secret,
            token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let err = JwtConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_empty_secret_is_fatal() {
        let err = JwtConfig::from_lookup(lookup(&[("JWT_SECRET", "")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_default_expiry_is_seven_days() {
        let config = JwtConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cr3t")])).unwrap();
        assert_eq!(config.secret, "s3cr3t");
        assert_eq!(config.token_expiry, 604800);
    }

    #[test]
    fn test_custom_expiry() {
        let config =
            JwtConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("JWT_EXPIRY", "60")])).unwrap();
        assert_eq!(config.token_expiry, 60);
    }

    #[test]
    fn test_invalid_expiry() {
        let err = JwtConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("JWT_EXPIRY", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "JWT_EXPIRY", .. }));
    }
}
