//! Method names understood by the Ola daemon

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::OlaError;

/// Wire names for the daemon operations
pub const PING: &str = "ping";
pub const LIST_CAMERAS: &str = "list_cameras";
pub const CAPTURE_THUMBNAIL: &str = "capture_thumbnail";
pub const VERIFY_ONCE: &str = "verify_once";
pub const STATUS: &str = "status";

/// All supported Ola methods, in the order the smoke harness exercises them
pub const ALL_METHODS: &[&str] = &[PING, LIST_CAMERAS, CAPTURE_THUMBNAIL, VERIFY_ONCE, STATUS];

/// A daemon operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Health check
    Ping,
    /// Enumerate attached cameras
    ListCameras,
    /// Grab a preview frame from one camera
    CaptureThumbnail,
    /// Run a single verification pass
    VerifyOnce,
    /// Query daemon status
    Status,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Ping,
        Method::ListCameras,
        Method::CaptureThumbnail,
        Method::VerifyOnce,
        Method::Status,
    ];

    /// Name of the method on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Ping => PING,
            Method::ListCameras => LIST_CAMERAS,
            Method::CaptureThumbnail => CAPTURE_THUMBNAIL,
            Method::VerifyOnce => VERIFY_ONCE,
            Method::Status => STATUS,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = OlaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| OlaError::UnknownMethod(s.to_string()))
    }
}
