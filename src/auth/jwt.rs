use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::service_account::ServiceAccountKey;

pub const GRANT_TYPE_JWT_BEARER: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
}

impl AssertionClaims {
    pub fn new(key: &ServiceAccountKey, scopes: &[&str], subject: &str, now: SystemTime) -> Self {
        let iat = now
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or_default();

        Self {
            iss: key.client_email.clone(),
            scope: scopes.join(" "),
            aud: key.token_uri().to_string(),
            sub: subject.to_string(),
            iat,
            exp: iat.saturating_add(ASSERTION_LIFETIME_SECS),
        }
    }
}

/// Signs the assertion that impersonates `subject` for the given scopes.
pub fn sign_assertion(
    key: &ServiceAccountKey,
    scopes: &[&str],
    subject: &str,
    now: SystemTime,
) -> AppResult<String> {
    let claims = AssertionClaims::new(key, scopes, subject, now);
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|err| {
        AppError::Credentials(format!("service account private key is not valid RSA PEM: {err}"))
    })?;

    let mut header = Header::new(Algorithm::RS256);
    header.typ = Some("JWT".to_string());
    header.kid = key.private_key_id.clone();

    Ok(encode(&header, &claims, &encoding_key)?)
}
