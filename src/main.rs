//! Ola - command-line client for the Ola daemon.

use anyhow::Result;
use ola_client::cli::{unknown_command, Cli, Invocation};
use ola_client::config::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse_args() {
        Invocation::Run(cli) => {
            init_logging(cli.log_level.as_deref())?;
            cli.run().await
        }
        Invocation::Unknown(name) => {
            unknown_command(&name);
            Ok(())
        }
        Invocation::Exit(e) => e.exit(),
    }
}
