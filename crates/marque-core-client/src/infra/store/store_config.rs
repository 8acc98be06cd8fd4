// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::{Secret, SecretString};
use url::Url;

pub const STORE_URL_VAR: &str = "MARQUE_STORE_URL";
pub const STORE_KEY_VAR: &str = "MARQUE_STORE_KEY";

/// Connection settings for a remote store gateway. Resolved once at startup;
/// a missing or malformed variable is fatal immediately instead of surfacing
/// on the first request.
pub struct StoreConfig {
    pub endpoint: Url,
    pub publishable_key: SecretString,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVariable(&'static str),
    #[error("Environment variable {0} is not a valid URL")]
    InvalidEndpoint(&'static str),
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, StoreConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreConfigError> {
        let endpoint = lookup(STORE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(StoreConfigError::MissingVariable(STORE_URL_VAR))?;
        let endpoint = Url::parse(endpoint.trim())
            .map_err(|_| StoreConfigError::InvalidEndpoint(STORE_URL_VAR))?;

        let publishable_key = lookup(STORE_KEY_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(StoreConfigError::MissingVariable(STORE_KEY_VAR))?;

        Ok(StoreConfig {
            endpoint,
            publishable_key: Secret::new(publishable_key),
        })
    }
}
