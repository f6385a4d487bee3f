use clap::Parser;
use clap::error::ErrorKind;
use gmail_delegater::cli::{Cli, Command};
use gmail_delegater::commands::DelegateCommand;

#[test]
fn parses_list() {
    let cli = Cli::try_parse_from(["gmail-delegater", "l", "alice@example.com"])
        .expect("cli parse should work");
    match cli.command {
        Command::List(list) => assert_eq!(list.mailbox, "alice@example.com"),
        _ => panic!("expected list command"),
    }
}

#[test]
fn parses_add() {
    let cli = Cli::try_parse_from(["gmail-delegater", "a", "alice@example.com", "bob@example.com"])
        .expect("cli parse should work");
    assert_eq!(
        DelegateCommand::from(cli.command),
        DelegateCommand::Add {
            mailbox: "alice@example.com".to_string(),
            delegate: "bob@example.com".to_string(),
        }
    );
}

#[test]
fn parses_delete_with_long_alias_and_trailing_flags() {
    let cli = Cli::try_parse_from([
        "gmail-delegater",
        "delete",
        "alice@example.com",
        "bob@example.com",
        "--json",
        "--fail-on-error",
        "-vv",
    ])
    .expect("cli parse should work");

    assert!(cli.json);
    assert!(cli.fail_on_error);
    assert_eq!(cli.verbose, 2);
    assert_eq!(
        DelegateCommand::from(cli.command),
        DelegateCommand::Delete {
            mailbox: "alice@example.com".to_string(),
            delegate: "bob@example.com".to_string(),
        }
    );
}

#[test]
fn parses_key_file_before_command() {
    let cli = Cli::try_parse_from([
        "gmail-delegater",
        "--key-file",
        "/etc/delegater/key.json",
        "list",
        "alice@example.com",
    ])
    .expect("cli parse should work");
    assert_eq!(
        cli.key_file.as_deref(),
        Some(std::path::Path::new("/etc/delegater/key.json"))
    );
}

#[test]
fn rejects_unknown_command() {
    let err = Cli::try_parse_from(["gmail-delegater", "x", "alice@example.com"])
        .expect_err("unknown command should fail");
    assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
}

#[test]
fn add_requires_delegate_address() {
    let err = Cli::try_parse_from(["gmail-delegater", "a", "alice@example.com"])
        .expect_err("missing delegate should fail");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn delete_requires_delegate_address() {
    let err = Cli::try_parse_from(["gmail-delegater", "d", "alice@example.com"])
        .expect_err("missing delegate should fail");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn list_tolerates_a_trailing_delegate_address() {
    let cli = Cli::try_parse_from([
        "gmail-delegater",
        "l",
        "alice@example.com",
        "bob@example.com",
    ])
    .expect("list with a trailing address should parse");
    assert_eq!(
        DelegateCommand::from(cli.command),
        DelegateCommand::List {
            mailbox: "alice@example.com".to_string(),
        }
    );
}

#[test]
fn list_rejects_two_extra_addresses() {
    let err = Cli::try_parse_from([
        "gmail-delegater",
        "l",
        "alice@example.com",
        "bob@example.com",
        "carol@example.com",
    ])
    .expect_err("too many positionals should fail");
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn add_rejects_extra_address() {
    let err = Cli::try_parse_from([
        "gmail-delegater",
        "a",
        "alice@example.com",
        "bob@example.com",
        "carol@example.com",
    ])
    .expect_err("too many positionals should fail");
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn rejects_missing_mailbox() {
    let err = Cli::try_parse_from(["gmail-delegater", "l"]).expect_err("mailbox is required");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn rejects_blank_mailbox() {
    let err = Cli::try_parse_from(["gmail-delegater", "l", "  "]).expect_err("blank mailbox");
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}
