use serde::{Deserialize, Serialize};

/// One entry of the `list_cameras` result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraInfo {
    /// Device node, e.g. `/dev/video0`
    pub path: String,
    pub name: String,
    /// Zero-based index accepted by `capture_thumbnail`
    pub index: usize,
}

/// Result of `capture_thumbnail`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Base64-encoded image data
    pub image: String,
}

/// Result of `verify_once`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub ok: bool,
    #[serde(default)]
    pub reason: Option<String>,
}
