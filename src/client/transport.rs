//! Ola daemon client over a Unix domain socket

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use tokio::time;
use tracing::{debug, trace};

use super::error::CallError;
use super::ids::{IdSource, SequentialIds};
use crate::config::settings::ClientSettings;
use crate::protocol::transport::first_line;
use crate::protocol::{LineConnection, Method, Params, Request, Response};

/// Client for the Ola daemon
///
/// Every call opens its own connection, sends one request line, reads one
/// response line and closes the connection. Nothing is retried.
///
/// Cloning is cheap; clones share the same id sequence.
#[derive(Clone)]
pub struct OlaClient {
    settings: ClientSettings,
    ids: Arc<dyn IdSource>,
}

impl OlaClient {
    /// Create a client with its own id sequence starting at 1
    pub fn new(settings: ClientSettings) -> Self {
        Self::with_id_source(settings, Arc::new(SequentialIds::new()))
    }

    /// Create a client configured from `OLA_SOCKET` and `OLA_CLIENT_TIMEOUT`
    pub fn from_env() -> Self {
        Self::new(ClientSettings::from_env())
    }

    /// Create a client that draws request ids from `ids`
    pub fn with_id_source(settings: ClientSettings, ids: Arc<dyn IdSource>) -> Self {
        Self { settings, ids }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn socket_path(&self) -> &Path {
        &self.settings.socket_path
    }

    pub fn timeout(&self) -> Duration {
        self.settings.timeout
    }

    /// Health check
    pub async fn ping(&self) -> Response {
        self.call(Method::Ping, Params::new()).await
    }

    /// Enumerate attached cameras
    pub async fn list_cameras(&self) -> Response {
        self.call(Method::ListCameras, Params::new()).await
    }

    /// Capture a preview frame from the camera at zero-based `index`
    pub async fn capture_thumbnail(&self, index: usize) -> Response {
        let mut params = Params::new();
        params.insert("index".to_string(), json!(index));
        self.call(Method::CaptureThumbnail, params).await
    }

    /// Run one verification pass
    pub async fn verify_once(&self) -> Response {
        self.call(Method::VerifyOnce, Params::new()).await
    }

    /// Query daemon status
    pub async fn status(&self) -> Response {
        self.call(Method::Status, Params::new()).await
    }

    /// Perform one round trip, folding any failure into the envelope
    ///
    /// Never fails: transport problems come back as a response whose `error`
    /// names the cause and whose `id` is the id allocated for this call.
    pub async fn call(&self, method: Method, params: Params) -> Response {
        let request = self.build_request(method, params);
        match self.round_trip(&request).await {
            Ok(response) => response,
            Err(e) => {
                debug!(method = %method, id = request.id, kind = e.kind(), "Call failed");
                Response::failure(request.id, e.to_string())
            }
        }
    }

    /// Perform one round trip, returning the failure reason as a typed error
    ///
    /// Daemon-reported errors are not failures here; they arrive inside the
    /// returned `Response`.
    pub async fn request(&self, method: Method, params: Params) -> Result<Response, CallError> {
        let request = self.build_request(method, params);
        self.round_trip(&request).await
    }

    fn build_request(&self, method: Method, params: Params) -> Request {
        let request = Request::new(self.ids.next_id(), method, params);
        trace!("Prepared request: {} (id={})", request.method, request.id);
        request
    }

    async fn round_trip(&self, request: &Request) -> Result<Response, CallError> {
        let timeout = self.settings.timeout;
        let total_start = Instant::now();

        let mut conn = time::timeout(timeout, LineConnection::connect(&self.settings.socket_path))
            .await
            .map_err(|_| CallError::connect_timeout())?
            .map_err(CallError::connect)?;
        let connect_elapsed = total_start.elapsed();

        let line = request
            .to_line()
            .map_err(|source| CallError::Encode { source })?;

        time::timeout(timeout, conn.write_line(&line))
            .await
            .map_err(|_| CallError::send_timeout())?
            .map_err(CallError::send)?;

        let read_start = Instant::now();
        let data = time::timeout(timeout, conn.read_until_newline())
            .await
            .map_err(|_| CallError::Timeout)?
            .map_err(CallError::receive)?;
        let read_elapsed = read_start.elapsed();
        drop(conn);

        if data.is_empty() {
            return Err(CallError::EmptyResponse);
        }

        let response =
            Response::from_line(first_line(&data)).map_err(|source| CallError::Decode { source })?;

        if response.id != Some(request.id) {
            trace!(
                expected = request.id,
                got = ?response.id,
                "Response id does not echo request id"
            );
        }

        debug!(
            method = %request.method,
            id = request.id,
            total_ms = total_start.elapsed().as_micros() as f64 / 1000.0,
            connect_ms = connect_elapsed.as_micros() as f64 / 1000.0,
            read_ms = read_elapsed.as_micros() as f64 / 1000.0,
            "Round trip complete"
        );

        Ok(response)
    }
}

impl fmt::Debug for OlaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OlaClient")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
