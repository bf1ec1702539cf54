//! Ola daemon client
//!
//! Talks to the local Ola daemon over a Unix domain socket using
//! newline-delimited JSON envelopes, one request and one response per
//! connection.
//!
//! ```rust,ignore
//! use ola_client::client::OlaClient;
//!
//! let client = OlaClient::from_env();
//! let response = client.ping().await;
//! if let Some(error) = response.error_message() {
//!     eprintln!("daemon unavailable: {}", error);
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod harness;
pub mod models;
pub mod protocol;

/// Library-level error types
#[derive(Debug, thiserror::Error)]
pub enum OlaError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl OlaError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results
pub type OlaResult<T> = Result<T, OlaError>;
