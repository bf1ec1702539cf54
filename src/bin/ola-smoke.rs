//! ola-smoke - checks every daemon operation once and exits 2 on the first failure.
//!
//! Usage:
//!   TEST_OLA_SOCKET=/tmp/ola.sock TEST_TIMEOUT=5.0 ola-smoke

use anyhow::Result;
use ola_client::config::{init_logging, ClientSettings, HARNESS_ENV};
use ola_client::harness::{default_steps, harness_client, run_steps, SETTLE_DELAY};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(None)?;

    let settings = ClientSettings::from_env_keys(&HARNESS_ENV);
    println!("Integration test connecting to: {}", settings.socket_path.display());

    tokio::time::sleep(SETTLE_DELAY).await;

    let client = harness_client(settings);
    let mut stdout = std::io::stdout();
    let outcome = run_steps(&client, &default_steps(), &mut stdout).await?;

    std::process::exit(outcome.exit_code());
}
