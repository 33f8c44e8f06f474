//! Service configuration.

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:3000").
    pub listen_addr: String,

    /// Payments API base URL (`WOMPI_URL`).
    pub wompi_url: String,

    /// Merchant public key (`WOMPI_PUBLIC_API_KEY`).
    pub public_key: String,

    /// Merchant private key (`WOMPI_PRIVATE_API_KEY`).
    pub private_key: String,

    /// Integrity secret used to sign transactions (`WOMPI_INTEGRITY_HASH`).
    pub integrity_secret: String,

    /// Payouts API base URL (`WOMPI_PAYOUTS_URL`).
    pub payouts_url: String,

    /// Payouts API key (`WOMPI_PAYOUTS_API_KEY`, optional).
    pub payouts_api_key: Option<String>,

    /// Payouts user principal id (`WOMPI_PAYOUTS_USER_ID`, optional).
    pub payouts_user_id: Option<String>,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set to an empty string.
    #[error("environment variable {0} must not be empty")]
    Empty(&'static str),

    /// A variable could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Required variables must be present and non-empty. Optional
    /// credentials must be non-empty when present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                None => Err(ConfigError::Missing(name)),
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
                Some(value) => Ok(value),
            }
        };
        let optional = |name: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(name) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
                other => Ok(other),
            }
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            None => 1024 * 1024, // 1MB
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "MAX_BODY_BYTES",
                value,
            })?,
        };

        Ok(Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:3000".into()),
            wompi_url: required("WOMPI_URL")?,
            public_key: required("WOMPI_PUBLIC_API_KEY")?,
            private_key: required("WOMPI_PRIVATE_API_KEY")?,
            integrity_secret: required("WOMPI_INTEGRITY_HASH")?,
            payouts_url: required("WOMPI_PAYOUTS_URL")?,
            payouts_api_key: optional("WOMPI_PAYOUTS_API_KEY")?,
            payouts_user_id: optional("WOMPI_PAYOUTS_USER_ID")?,
            cors_origins: lookup("CORS_ORIGINS")
                .unwrap_or_else(|| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes,
        })
    }
}
