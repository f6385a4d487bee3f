use serde::{Deserialize, Serialize};

/// A delegate grant as reported by Gmail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegate {
    pub delegate_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDelegateRequest<'a> {
    pub delegate_email: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListDelegatesResponse {
    #[serde(default)]
    pub delegates: Option<Vec<Delegate>>,
}
