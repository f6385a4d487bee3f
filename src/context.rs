use std::path::PathBuf;

use crate::auth::{ServiceAccountAuthenticator, ServiceAccountKey};
use crate::config::{self, AppPaths};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub key: ServiceAccountKey,
    pub authenticator: ServiceAccountAuthenticator,
    pub output: Output,
}

impl AppContext {
    /// Validates local configuration and loads the service account key.
    /// Any failure here is fatal and happens before a request is sent.
    pub fn bootstrap(
        key_file: Option<PathBuf>,
        api_base_url: Option<&str>,
        json: bool,
    ) -> AppResult<Self> {
        let mut authenticator = ServiceAccountAuthenticator::new();
        if let Some(base_url) = api_base_url {
            authenticator = authenticator.with_api_base_url(base_url)?;
        }

        let paths = AppPaths::discover();
        let key_file = config::resolve_key_file(key_file, &paths)?;
        tracing::debug!(config_dir = ?paths.config_dir(), "resolved key file location");

        let key = ServiceAccountKey::load(&key_file)?;
        tracing::info!(
            key_file = %key_file.display(),
            client_email = %key.client_email,
            "service account key loaded"
        );

        Ok(Self {
            key,
            authenticator,
            output: Output::new(json),
        })
    }
}
