use serde::Serialize;

use crate::api::DelegateApi;
use crate::api::models::Delegate;
use crate::auth::{Authenticator, DELEGATION_SCOPES, ServiceAccountKey};
use crate::cli::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegateCommand {
    List { mailbox: String },
    Add { mailbox: String, delegate: String },
    Delete { mailbox: String, delegate: String },
}

impl DelegateCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Add { .. } => "add",
            Self::Delete { .. } => "delete",
        }
    }

    pub fn mailbox(&self) -> &str {
        match self {
            Self::List { mailbox } | Self::Add { mailbox, .. } | Self::Delete { mailbox, .. } => {
                mailbox.as_str()
            }
        }
    }

    /// Announces the request before it is sent.
    pub fn progress_line(&self) -> String {
        match self {
            Self::List { mailbox } => format!("Listing delegates for {mailbox}"),
            Self::Add { mailbox, delegate } => {
                format!("Adding delegate {delegate} to {mailbox}")
            }
            Self::Delete { mailbox, delegate } => {
                format!("Removing delegate {delegate} from {mailbox}")
            }
        }
    }

    pub fn delegate(&self) -> Option<&str> {
        match self {
            Self::List { .. } => None,
            Self::Add { delegate, .. } | Self::Delete { delegate, .. } => Some(delegate.as_str()),
        }
    }
}

impl From<Command> for DelegateCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::List(args) => {
                if let Some(ignored) = args.ignored.as_deref() {
                    tracing::debug!(ignored, "list takes no delegate address; ignoring it");
                }
                Self::List {
                    mailbox: args.mailbox,
                }
            }
            Command::Add(args) => Self::Add {
                mailbox: args.mailbox,
                delegate: args.delegate,
            },
            Command::Delete(args) => Self::Delete {
                mailbox: args.mailbox,
                delegate: args.delegate,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Listed { delegates: Vec<Delegate> },
    Created { record: Delegate },
    Deleted,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub command: &'static str,
    pub mailbox: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate: Option<String>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Report {
    fn new(command: &DelegateCommand, outcome: Outcome) -> Self {
        Self {
            command: command.name(),
            mailbox: command.mailbox().to_string(),
            delegate: command.delegate().map(ToOwned::to_owned),
            outcome,
        }
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    pub fn text_lines(&self) -> Vec<String> {
        match &self.outcome {
            Outcome::Listed { delegates } if delegates.is_empty() => {
                vec![format!("No delegates found for user {}.", self.mailbox)]
            }
            Outcome::Listed { delegates } => {
                let mut lines = Vec::with_capacity(delegates.len() + 1);
                lines.push(format!("Delegates for user {}:", self.mailbox));
                lines.extend(
                    delegates
                        .iter()
                        .map(|delegate| format!(" - {}", delegate.delegate_email)),
                );
                lines
            }
            Outcome::Created { record } => {
                let rendered = serde_json::to_string(record)
                    .unwrap_or_else(|_| record.delegate_email.clone());
                vec![format!("Delegate created: {rendered}")]
            }
            Outcome::Deleted => vec![format!(
                "Delegate deleted: {}",
                self.delegate.as_deref().unwrap_or_default()
            )],
            Outcome::Failed { error } => vec![format!("An error occurred: {error}")],
        }
    }
}

/// Authenticates as the mailbox owner and runs the command.
pub async fn run<A: Authenticator>(
    authenticator: &A,
    key: &ServiceAccountKey,
    command: &DelegateCommand,
) -> Report {
    match authenticator
        .authenticate(key, &DELEGATION_SCOPES, command.mailbox())
        .await
    {
        Ok(api) => execute(&api, command).await,
        Err(err) => {
            tracing::debug!(mailbox = command.mailbox(), error = %err, "authentication failed");
            Report::new(command, Outcome::Failed {
                error: err.to_string(),
            })
        }
    }
}

/// Issues exactly one delegates request for `command`.
pub async fn execute<C: DelegateApi>(api: &C, command: &DelegateCommand) -> Report {
    let result = match command {
        DelegateCommand::List { mailbox } => {
            tracing::info!(mailbox = %mailbox, "listing delegates");
            api.list_delegates(mailbox)
                .await
                .map(|delegates| Outcome::Listed { delegates })
        }
        DelegateCommand::Add { mailbox, delegate } => {
            tracing::info!(mailbox = %mailbox, delegate = %delegate, "adding delegate");
            api.create_delegate(mailbox, delegate)
                .await
                .map(|record| Outcome::Created { record })
        }
        DelegateCommand::Delete { mailbox, delegate } => {
            tracing::info!(mailbox = %mailbox, delegate = %delegate, "deleting delegate");
            api.delete_delegate(mailbox, delegate)
                .await
                .map(|()| Outcome::Deleted)
        }
    };

    let outcome = result.unwrap_or_else(|err| {
        tracing::debug!(command = command.name(), error = %err, "gmail api request failed");
        Outcome::Failed {
            error: err.to_string(),
        }
    });

    Report::new(command, outcome)
}
