pub mod client;
pub mod delegates;
pub mod models;

use crate::error::AppResult;

use models::Delegate;

/// The delegates surface of the Gmail settings API.
#[allow(async_fn_in_trait)]
pub trait DelegateApi {
    async fn list_delegates(&self, mailbox: &str) -> AppResult<Vec<Delegate>>;
    async fn create_delegate(&self, mailbox: &str, delegate: &str) -> AppResult<Delegate>;
    async fn delete_delegate(&self, mailbox: &str, delegate: &str) -> AppResult<()>;
}
