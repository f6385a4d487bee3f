use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "gmail-delegater",
    version,
    about = "Manage Gmail mailbox delegates with a domain-wide delegated service account"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "GMAIL_DELEGATER_KEY_FILE",
        help = "Service account key file (JSON)"
    )]
    pub key_file: Option<PathBuf>,
    #[arg(long, global = true, env = "GMAIL_API_BASE_URL", hide = true)]
    pub api_base_url: Option<String>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(
        long,
        global = true,
        help = "Exit with a failure status when the Gmail API rejects the request"
    )]
    pub fail_on_error: bool,
    #[arg(long, global = true, help = "Print a progress line before sending the request")]
    pub progress: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the delegates of a mailbox
    #[command(name = "l", visible_alias = "list")]
    List(MailboxArgs),
    /// Grant a delegate access to a mailbox
    #[command(name = "a", visible_alias = "add")]
    Add(DelegateArgs),
    /// Remove a delegate from a mailbox
    #[command(name = "d", visible_alias = "delete")]
    Delete(DelegateArgs),
}

#[derive(Debug, Args)]
pub struct MailboxArgs {
    #[arg(value_parser = parse_address, help = "Mailbox owner address")]
    pub mailbox: String,
    /// Accepted so `l <mailbox> <delegate>` still lists; the value is unused.
    #[arg(hide = true)]
    pub ignored: Option<String>,
}

#[derive(Debug, Args)]
pub struct DelegateArgs {
    #[arg(value_parser = parse_address, help = "Mailbox owner address")]
    pub mailbox: String,
    #[arg(value_parser = parse_address, help = "Delegate address")]
    pub delegate: String,
}

fn parse_address(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("address must not be empty".to_string());
    }

    Ok(trimmed.to_string())
}
