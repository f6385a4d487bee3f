use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

use super::jwt::GRANT_TYPE_JWT_BEARER;

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
}

/// Trades a signed assertion for a short-lived access token.
pub async fn exchange_assertion(
    http: &Client,
    token_uri: &str,
    assertion: &str,
) -> AppResult<AccessToken> {
    let form = [("grant_type", GRANT_TYPE_JWT_BEARER), ("assertion", assertion)];
    let response = http.post(token_uri).form(&form).send().await?;

    let status = response.status();
    if status.is_success() {
        let token: AccessToken = response.json().await?;
        tracing::debug!(
            token_type = token.token_type.as_deref().unwrap_or("unknown"),
            expires_in = token.expires_in,
            "access token issued"
        );
        return Ok(token);
    }

    let body = response.text().await.unwrap_or_default();
    Err(map_token_error(status, &body))
}

fn map_token_error(status: reqwest::StatusCode, body: &str) -> AppError {
    if let Ok(payload) = serde_json::from_str::<OAuthErrorResponse>(body) {
        if payload.error.is_some() || payload.error_description.is_some() {
            let error = payload
                .error
                .unwrap_or_else(|| "unknown_oauth_error".to_string());
            let description = payload
                .error_description
                .unwrap_or_else(|| "no description".to_string());
            return AppError::Auth(format!(
                "service account token exchange failed ({status}): {error} ({description})"
            ));
        }
    }

    AppError::Auth(format!(
        "service account token exchange failed ({status}): {}",
        body.trim()
    ))
}
