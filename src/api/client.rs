use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, AppResult};

use super::DelegateApi;
use super::delegates;
use super::models::{CreateDelegateRequest, Delegate, ListDelegatesResponse};

pub const GMAIL_API_BASE_URL: &str = "https://gmail.googleapis.com";

#[derive(Debug, Clone)]
pub struct GmailClient {
    http: Client,
    base_url: Url,
    access_token: String,
}

impl GmailClient {
    pub fn new(access_token: impl Into<String>) -> AppResult<Self> {
        Self::with_base_url(Client::new(), GMAIL_API_BASE_URL, access_token)
    }

    pub fn with_base_url(
        http: Client,
        base_url: &str,
        access_token: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
            access_token: access_token.into(),
        })
    }

    fn delegates_url(&self, mailbox: &str, delegate: Option<&str>) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::InvalidInput("gmail api base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(delegates::delegates_segments(mailbox, delegate));
        Ok(url)
    }

    async fn parse_json_response<T: DeserializeOwned>(&self, response: Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }

    async fn expect_success(&self, response: Response) -> AppResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

impl DelegateApi for GmailClient {
    async fn list_delegates(&self, mailbox: &str) -> AppResult<Vec<Delegate>> {
        let url = self.delegates_url(mailbox, None)?;
        tracing::debug!(%url, "listing delegates");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let list: ListDelegatesResponse = self.parse_json_response(response).await?;
        Ok(list.delegates.unwrap_or_default())
    }

    async fn create_delegate(&self, mailbox: &str, delegate: &str) -> AppResult<Delegate> {
        let url = self.delegates_url(mailbox, None)?;
        tracing::debug!(%url, delegate, "creating delegate");

        let body = CreateDelegateRequest {
            delegate_email: delegate,
        };
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;
        self.parse_json_response(response).await
    }

    async fn delete_delegate(&self, mailbox: &str, delegate: &str) -> AppResult<()> {
        let url = self.delegates_url(mailbox, Some(delegate))?;
        tracing::debug!(%url, "deleting delegate");

        let response = self
            .http
            .delete(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        self.expect_success(response).await
    }
}

/// Validates a Gmail API base url: http(s) with a path that can be extended.
pub fn parse_base_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|err| AppError::Config(format!("invalid gmail api base url `{raw}`: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(AppError::Config(format!(
            "gmail api base url must be an http(s) url, got `{raw}`"
        )));
    }

    Ok(url)
}

#[derive(Debug, Deserialize)]
struct GmailApiErrorEnvelope {
    error: GmailApiError,
}

#[derive(Debug, Deserialize)]
struct GmailApiError {
    code: Option<u16>,
    status: Option<String>,
    message: Option<String>,
    errors: Option<Vec<GmailApiErrorDetail>>,
}

#[derive(Debug, Deserialize)]
struct GmailApiErrorDetail {
    reason: Option<String>,
}

impl GmailApiError {
    fn summary(self) -> Option<String> {
        let reason = self
            .errors
            .into_iter()
            .flatten()
            .find_map(|detail| detail.reason);
        let parts = [
            self.message,
            self.status.map(|status| format!("status={status}")),
            self.code.map(|code| format!("code={code}")),
            reason.map(|reason| format!("reason={reason}")),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let detail = serde_json::from_str::<GmailApiErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.summary())
        .unwrap_or_else(|| match body.trim() {
            "" => "no error details in response body".to_string(),
            raw => raw.to_string(),
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Auth(format!(
            "gmail api denied the delegation request ({status}): {detail}. check the domain-wide delegation scopes for the service account"
        )),
        _ => AppError::Api(format!("gmail api request failed ({status}): {detail}")),
    }
}
