#![allow(dead_code)]

//! Shared test infrastructure: an in-process stand-in for the Ola daemon.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ola_client::config::{init_test_logging, ClientSettings};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub const PLACEHOLDER_IMAGE: &str = "iVBORw0KGgoAAAANSUhEUgAAAAUAAAAFCAYAAACNbyblAAAAHElEQVQI12P4//8/w38GIAXDIBKE0DHxgljNBAAO9TXL0Y4OHwAAAABJRU5ErkJggg==";

type Handler = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// How the fake daemon treats each connection
#[derive(Clone)]
pub enum Behavior {
    /// Read one request line and answer with the handler's envelope
    Reply(Handler),
    /// Read one request line, write these bytes verbatim, then close
    Raw(Vec<u8>),
    /// Read one request line, write the chunks with `pause` between them, then close
    Chunked { chunks: Vec<Vec<u8>>, pause: Duration },
    /// Read one request line and close without writing
    CloseSilently,
    /// Accept and never answer
    Hang,
}

impl Behavior {
    /// Answer every operation the way the real daemon does
    pub fn serve() -> Self {
        Self::reply_with(daemon_response)
    }

    pub fn reply_with<F>(handler: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Behavior::Reply(Arc::new(handler))
    }

    pub fn raw(bytes: impl Into<Vec<u8>>) -> Self {
        Behavior::Raw(bytes.into())
    }
}

/// Envelope the real daemon would send for `request`
pub fn daemon_response(request: &Value) -> Value {
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request.get("method").and_then(Value::as_str).unwrap_or("");

    let result = match method {
        "ping" => Ok(json!({"ok": true, "version": "0.1.0"})),
        "list_cameras" => Ok(json!([
            {"path": "/dev/video0", "name": "Camera Device 0", "index": 0}
        ])),
        "capture_thumbnail" => {
            let index = request["params"]["index"].as_u64().unwrap_or(0);
            if index == 0 {
                Ok(json!({"image": PLACEHOLDER_IMAGE}))
            } else {
                Err(format!("Capture error: no camera at index {}", index))
            }
        }
        "verify_once" => Ok(json!({"ok": true, "reason": null})),
        "status" => Ok(json!({
            "status": "running",
            "version": "0.1.0",
            "backend": "stubbed",
            "socket": "/tmp/ola.sock"
        })),
        other => Err(format!("Unknown method: {}", other)),
    };

    match result {
        Ok(result) => json!({"id": id, "result": result, "error": null}),
        Err(error) => json!({"id": id, "result": null, "error": error}),
    }
}

/// A daemon listening on a socket in a private temporary directory
pub struct FakeDaemon {
    _dir: TempDir,
    pub socket_path: PathBuf,
    requests: Arc<Mutex<Vec<Value>>>,
    accept_loop: JoinHandle<()>,
}

impl FakeDaemon {
    pub async fn start(behavior: Behavior) -> Self {
        let _ = init_test_logging();

        let dir = TempDir::new().unwrap();
        let socket_path = dir.path().join("ola.sock");
        let listener = UnixListener::bind(&socket_path).unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let accept_loop = {
            let requests = requests.clone();
            tokio::spawn(async move {
                while let Ok((stream, _addr)) = listener.accept().await {
                    let behavior = behavior.clone();
                    let requests = requests.clone();
                    tokio::spawn(async move {
                        handle_connection(stream, behavior, requests).await;
                    });
                }
            })
        };

        Self {
            _dir: dir,
            socket_path,
            requests,
            accept_loop,
        }
    }

    pub fn settings(&self, timeout: Duration) -> ClientSettings {
        ClientSettings::new(&self.socket_path, timeout)
    }

    /// Every request line received so far, parsed as JSON
    pub async fn requests(&self) -> Vec<Value> {
        self.requests.lock().await.clone()
    }
}

impl Drop for FakeDaemon {
    fn drop(&mut self) {
        self.accept_loop.abort();
    }
}

async fn handle_connection(stream: UnixStream, behavior: Behavior, requests: Arc<Mutex<Vec<Value>>>) {
    if let Behavior::Hang = behavior {
        let _held = stream;
        tokio::time::sleep(Duration::from_secs(60)).await;
        return;
    }

    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut line = String::new();
    if reader.read_line(&mut line).await.is_err() {
        return;
    }

    let request: Value = serde_json::from_str(line.trim_end()).unwrap_or(Value::Null);
    requests.lock().await.push(request.clone());

    match behavior {
        Behavior::Reply(handler) => {
            let mut reply = serde_json::to_string(&handler(&request)).unwrap();
            reply.push('\n');
            let _ = write_half.write_all(reply.as_bytes()).await;
        }
        Behavior::Raw(bytes) => {
            let _ = write_half.write_all(&bytes).await;
        }
        Behavior::Chunked { chunks, pause } => {
            for chunk in chunks {
                if write_half.write_all(&chunk).await.is_err() {
                    return;
                }
                let _ = write_half.flush().await;
                tokio::time::sleep(pause).await;
            }
        }
        Behavior::CloseSilently | Behavior::Hang => {}
    }

    let _ = write_half.shutdown().await;
}
