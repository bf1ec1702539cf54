//! CLI command implementations.

use tracing::info;

use super::Commands;
use crate::client::OlaClient;
use crate::protocol::Response;

/// Send the request for `command` and return the envelope, success or not
pub async fn dispatch(client: &OlaClient, command: &Commands) -> Response {
    info!(
        "Sending {:?} to: {}",
        command,
        client.socket_path().display()
    );

    match command {
        Commands::Ping => client.ping().await,
        Commands::ListCameras => client.list_cameras().await,
        Commands::CaptureThumbnail { index } => client.capture_thumbnail(*index).await,
        Commands::VerifyOnce => client.verify_once().await,
        Commands::Status => client.status().await,
    }
}

/// Report a subcommand nobody recognizes
pub fn unknown_command(name: &str) {
    println!("Unknown command: {}", name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientSettings;
    use std::time::Duration;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_dispatch_returns_failure_envelope() {
        let dir = TempDir::new().unwrap();
        let client = OlaClient::new(ClientSettings::new(
            dir.path().join("absent.sock"),
            Duration::from_millis(100),
        ));

        let response = dispatch(&client, &Commands::CaptureThumbnail { index: 1 }).await;
        assert_eq!(response.id, Some(1));
        assert!(response.error_message().unwrap().starts_with("Connection failed:"));
    }
}
