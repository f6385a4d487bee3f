use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Service account key as downloaded from the Google Cloud console.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub token_uri: Option<String>,
}

impl ServiceAccountKey {
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            AppError::Credentials(format!(
                "unable to read service account key {}: {err}",
                path.display()
            ))
        })?;

        Self::from_json(&raw).map_err(|err| match err {
            AppError::Credentials(message) => {
                AppError::Credentials(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let key: Self = serde_json::from_str(raw)
            .map_err(|err| AppError::Credentials(format!("malformed service account key: {err}")))?;

        if let Some(kind) = key.account_type.as_deref() {
            if kind != "service_account" {
                return Err(AppError::Credentials(format!(
                    "expected a service_account key, got `{kind}`"
                )));
            }
        }

        if key.client_email.trim().is_empty() {
            return Err(AppError::Credentials(
                "service account key has an empty client_email".to_string(),
            ));
        }

        if !key.private_key.contains("PRIVATE KEY") {
            return Err(AppError::Credentials(
                "service account key does not contain a PEM private key".to_string(),
            ));
        }

        Ok(key)
    }

    pub fn token_uri(&self) -> &str {
        self.token_uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .unwrap_or(DEFAULT_TOKEN_URI)
    }
}

// Keeps the private key out of debug logs.
impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("client_email", &self.client_email)
            .field("client_id", &self.client_id)
            .field("token_uri", &self.token_uri())
            .finish_non_exhaustive()
    }
}
