//! CLI interface for Ola.
//!
//! One subcommand per daemon operation. The resulting envelope is printed to
//! stdout whether or not it carries an error.

mod commands;
mod utils;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

use crate::client::OlaClient;
use crate::config::ClientSettings;

pub use commands::*;
pub use utils::*;

#[derive(Parser, Debug)]
#[command(name = "ola")]
#[command(about = "Command-line client for the Ola daemon")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Daemon socket path (overrides OLA_SOCKET)
    #[arg(long, short = 's', global = true)]
    pub socket: Option<PathBuf>,

    /// Per-call timeout in seconds (overrides OLA_CLIENT_TIMEOUT)
    #[arg(long, short = 't', global = true)]
    pub timeout: Option<f64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Pretty-print the response envelope
    #[arg(long, global = true)]
    pub pretty: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check that the daemon is alive
    #[command(name = "ping")]
    Ping,

    /// List attached cameras
    #[command(name = "list_cameras", alias = "list-cameras")]
    ListCameras,

    /// Capture a preview frame from a camera
    #[command(name = "capture_thumbnail", alias = "capture-thumbnail")]
    CaptureThumbnail {
        /// Zero-based camera index
        #[arg(default_value_t = 0)]
        index: usize,
    },

    /// Run one verification pass
    #[command(name = "verify_once", alias = "verify-once")]
    VerifyOnce,

    /// Show daemon status
    #[command(name = "status")]
    Status,
}

/// Outcome of parsing the command line
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// A subcommand nobody recognizes; reported on stdout, not as a failure
    Unknown(String),
    /// Help, version or a usage error; clap prints it and picks the exit code
    Exit(clap::Error),
}

impl Cli {
    pub fn parse_args() -> Invocation {
        Self::parse_from_args(std::env::args_os())
    }

    pub fn parse_from_args<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Invocation::Run(cli),
            Err(e) => match unknown_command_name(&e) {
                Some(name) => Invocation::Unknown(name),
                None => Invocation::Exit(e),
            },
        }
    }

    /// Resolve settings: environment first, then command-line overrides
    pub fn settings(&self) -> Result<ClientSettings> {
        let mut settings = ClientSettings::from_env();

        if let Some(socket) = &self.socket {
            settings = settings.with_socket_path(socket);
        }

        if let Some(timeout) = self.timeout {
            settings = settings.with_timeout_secs(timeout)?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Run the CLI command
    pub async fn run(self) -> Result<()> {
        let Some(command) = self.command.clone() else {
            println!("{}", usage_line());
            return Ok(());
        };

        let client = OlaClient::new(self.settings()?);
        let response = dispatch(&client, &command).await;
        print_envelope(&response, self.pretty)
    }
}

fn unknown_command_name(error: &clap::Error) -> Option<String> {
    let context = match error.kind() {
        ErrorKind::InvalidSubcommand => ContextKind::InvalidSubcommand,
        ErrorKind::UnknownArgument => ContextKind::InvalidArg,
        _ => return None,
    };

    match error.get(context) {
        Some(ContextValue::String(name)) if !name.starts_with('-') => Some(name.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Invocation {
        Cli::parse_from_args(std::iter::once("ola").chain(args.iter().copied()))
    }

    fn command(args: &[&str]) -> Option<Commands> {
        match parse(args) {
            Invocation::Run(cli) => cli.command,
            other => panic!("Expected a runnable command, got {:?}", other),
        }
    }

    #[test]
    fn test_snake_case_subcommands() {
        assert_eq!(command(&["ping"]), Some(Commands::Ping));
        assert_eq!(command(&["list_cameras"]), Some(Commands::ListCameras));
        assert_eq!(command(&["verify_once"]), Some(Commands::VerifyOnce));
        assert_eq!(command(&["status"]), Some(Commands::Status));
    }

    #[test]
    fn test_kebab_case_aliases() {
        assert_eq!(command(&["list-cameras"]), Some(Commands::ListCameras));
        assert_eq!(
            command(&["capture-thumbnail", "1"]),
            Some(Commands::CaptureThumbnail { index: 1 })
        );
    }

    #[test]
    fn test_capture_index_defaults_to_zero() {
        assert_eq!(
            command(&["capture_thumbnail"]),
            Some(Commands::CaptureThumbnail { index: 0 })
        );
        assert_eq!(
            command(&["capture_thumbnail", "3"]),
            Some(Commands::CaptureThumbnail { index: 3 })
        );
    }

    #[test]
    fn test_no_command() {
        assert_eq!(command(&[]), None);
    }

    #[test]
    fn test_unknown_command_is_not_an_exit() {
        match parse(&["reboot"]) {
            Invocation::Unknown(name) => assert_eq!(name, "reboot"),
            other => panic!("Expected unknown command, got {:?}", other),
        }
    }

    #[test]
    fn test_help_exits_through_clap() {
        assert!(matches!(parse(&["--help"]), Invocation::Exit(_)));
    }

    #[test]
    fn test_global_overrides() {
        let cli = match parse(&["status", "--socket", "/tmp/dev.sock", "--timeout", "0.5"]) {
            Invocation::Run(cli) => cli,
            other => panic!("Expected a runnable command, got {:?}", other),
        };

        let settings = cli.settings().unwrap();
        assert_eq!(settings.socket_path, PathBuf::from("/tmp/dev.sock"));
        assert_eq!(settings.timeout, std::time::Duration::from_millis(500));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = match parse(&["ping", "--timeout", "0"]) {
            Invocation::Run(cli) => cli,
            other => panic!("Expected a runnable command, got {:?}", other),
        };
        assert!(cli.settings().is_err());
    }
}
