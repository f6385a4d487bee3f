pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;

use app::ExitStatus;
use cli::Cli;
use error::AppResult;

pub async fn run(cli: Cli) -> AppResult<ExitStatus> {
    app::run(cli).await
}
