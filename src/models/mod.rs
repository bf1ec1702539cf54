//! Typed views of the daemon's `result` payloads
//!
//! The client never interprets results itself; callers that want structure
//! decode with [`Response::decode_result`](crate::protocol::Response::decode_result).

pub mod camera;
pub mod status;

pub use camera::{CameraInfo, Thumbnail, Verification};
pub use status::{DaemonStatus, PingResult};
