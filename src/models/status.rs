use serde::{Deserialize, Serialize};

/// Result of `ping`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResult {
    pub ok: bool,
    pub version: String,
}

/// Result of `status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonStatus {
    /// "running" while the daemon is serving requests
    pub status: String,
    pub version: String,
    /// Camera backend in use ("stubbed" when no capture library is linked)
    pub backend: String,
    /// Socket the daemon is listening on
    pub socket: String,
}
