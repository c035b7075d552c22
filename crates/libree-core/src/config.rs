use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::error::Error;
use crate::storage::service::{DEFAULT_SERVICE_URL, DEFAULT_USERNAME};

/// Runtime configuration, read from `LIBREE_*` environment variables only.
/// There is no config file and no persisted local state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub couchdb_url: Option<String>,
    pub couchdb_user: Option<String>,
    pub couchdb_pass: Option<String>,
    pub storage_account: Option<String>,
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(Environment::with_prefix("LIBREE"))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

impl AppConfig {
    /// Effective service URL: an explicit override wins over the environment,
    /// which wins over the built-in default.
    pub fn service_url(&self, override_url: Option<&str>) -> String {
        override_url
            .or(self.couchdb_url.as_deref())
            .unwrap_or(DEFAULT_SERVICE_URL)
            .to_string()
    }

    pub fn username(&self) -> &str {
        self.couchdb_user.as_deref().unwrap_or(DEFAULT_USERNAME)
    }

    /// There is no default password and an empty value counts as unset; a
    /// run without one fails before any request is issued.
    pub fn password(&self) -> Result<&str, Error> {
        self.couchdb_pass
            .as_deref()
            .filter(|pass| !pass.is_empty())
            .ok_or(Error::MissingPassword)
    }
}
