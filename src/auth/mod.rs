pub mod jwt;
pub mod service_account;
pub mod token;

use std::time::SystemTime;

use reqwest::Client;
use url::Url;

use crate::api::client::{self, GmailClient};
use crate::api::DelegateApi;
use crate::error::AppResult;

pub use service_account::ServiceAccountKey;
pub use token::AccessToken;

pub const SETTINGS_SHARING_SCOPE: &str = "https://www.googleapis.com/auth/gmail.settings.sharing";
pub const SETTINGS_BASIC_SCOPE: &str = "https://www.googleapis.com/auth/gmail.settings.basic";

/// Scopes needed to manage delegates.
pub const DELEGATION_SCOPES: [&str; 2] = [SETTINGS_SHARING_SCOPE, SETTINGS_BASIC_SCOPE];

/// Turns a service account key into a client acting as `subject`.
#[allow(async_fn_in_trait)]
pub trait Authenticator {
    type Api: DelegateApi;

    async fn authenticate(
        &self,
        key: &ServiceAccountKey,
        scopes: &[&str],
        subject: &str,
    ) -> AppResult<Self::Api>;
}

#[derive(Debug, Clone)]
pub struct ServiceAccountAuthenticator {
    http: Client,
    api_base_url: Option<Url>,
}

impl ServiceAccountAuthenticator {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            api_base_url: None,
        }
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Points API calls at another host. Rejected before any request is sent.
    pub fn with_api_base_url(mut self, base_url: &str) -> AppResult<Self> {
        self.api_base_url = Some(client::parse_base_url(base_url)?);
        Ok(self)
    }
}

impl Default for ServiceAccountAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl Authenticator for ServiceAccountAuthenticator {
    type Api = GmailClient;

    async fn authenticate(
        &self,
        key: &ServiceAccountKey,
        scopes: &[&str],
        subject: &str,
    ) -> AppResult<GmailClient> {
        tracing::debug!(
            issuer = %key.client_email,
            subject,
            token_uri = key.token_uri(),
            "requesting delegated access token"
        );

        let assertion = jwt::sign_assertion(key, scopes, subject, SystemTime::now())?;
        let token = token::exchange_assertion(&self.http, key.token_uri(), &assertion).await?;

        let base_url = self
            .api_base_url
            .as_ref()
            .map_or(client::GMAIL_API_BASE_URL, Url::as_str);
        GmailClient::with_base_url(self.http.clone(), base_url, token.access_token)
    }
}
