use crate::cli::Cli;
use crate::commands::{self, DelegateCommand};
use crate::context::AppContext;
use crate::error::AppResult;

/// How the process should end once the command has been reported.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExitStatus {
    Success,
    RemoteFailure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::RemoteFailure => 1,
        }
    }
}

pub async fn run(cli: Cli) -> AppResult<ExitStatus> {
    let Cli {
        key_file,
        api_base_url,
        json,
        verbose: _,
        fail_on_error,
        progress,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(key_file, api_base_url.as_deref(), json)?;
    let command = DelegateCommand::from(command);

    if progress {
        ctx.output.progress(&command.progress_line())?;
    }

    let report = commands::delegates::run(&ctx.authenticator, &ctx.key, &command).await;
    ctx.output.emit(&report.text_lines(), &report)?;

    // A rejected request still exits 0 unless --fail-on-error is set.
    if report.failed() && fail_on_error {
        return Ok(ExitStatus::RemoteFailure);
    }

    Ok(ExitStatus::Success)
}
