//! Failure reasons for a single round trip

use std::io;

/// Why a call did not produce a daemon response
///
/// The `Display` output is the message placed in the `error` field of the
/// failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error("Connection failed: {source}")]
    Connect {
        #[source]
        source: io::Error,
    },

    #[error("Client error: {source}")]
    Send {
        #[source]
        source: io::Error,
    },

    #[error("Client error: {source}")]
    Receive {
        #[source]
        source: io::Error,
    },

    #[error("Client error: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Client error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Empty response from server")]
    EmptyResponse,

    #[error("Request timed out")]
    Timeout,
}

impl CallError {
    pub fn connect(source: io::Error) -> Self {
        Self::Connect { source }
    }

    /// Connect attempt exceeded the configured timeout
    pub fn connect_timeout() -> Self {
        Self::Connect {
            source: io::Error::new(io::ErrorKind::TimedOut, "timed out"),
        }
    }

    pub fn send(source: io::Error) -> Self {
        Self::Send { source }
    }

    /// Write exceeded the configured timeout
    pub fn send_timeout() -> Self {
        Self::Send {
            source: io::Error::new(io::ErrorKind::TimedOut, "timed out"),
        }
    }

    pub fn receive(source: io::Error) -> Self {
        Self::Receive { source }
    }

    /// Short machine-readable name of the failure class
    pub fn kind(&self) -> &'static str {
        match self {
            CallError::Connect { .. } => "connect",
            CallError::Send { .. } => "send",
            CallError::Receive { .. } => "receive",
            CallError::Encode { .. } => "encode",
            CallError::Decode { .. } => "decode",
            CallError::EmptyResponse => "empty_response",
            CallError::Timeout => "timeout",
        }
    }
}
