//! Ola daemon wire protocol
//!
//! Requests and responses are JSON objects, one per line, exchanged over a
//! Unix domain stream socket:
//!
//! ```text
//! -> {"id":1,"method":"ping","params":{}}
//! <- {"id":1,"result":{"ok":true,"version":"0.1.0"},"error":null}
//! ```
//!
//! Each connection carries a single request and a single response.

pub mod envelope;
pub mod methods;
pub mod transport;

pub use envelope::{Params, Request, Response};
pub use methods::{Method, ALL_METHODS};
pub use transport::LineConnection;

/// Well-known daemon socket under the systemd runtime directory
pub const DEFAULT_SOCKET_PATH: &str = "/run/ola/ola.sock";

/// Default per-call timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;
