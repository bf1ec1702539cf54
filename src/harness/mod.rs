//! End-to-end smoke checks against a running daemon
//!
//! Calls every operation in turn with request id 1 and stops at the first
//! response that carries an error.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::info;

use crate::client::{FixedId, OlaClient};
use crate::config::ClientSettings;
use crate::protocol::{Method, Params, Response};
use crate::OlaResult;

/// Process exit status when a step fails
pub const FAILURE_EXIT_CODE: i32 = 2;

/// Pause before the first request, for daemons started just before the harness
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Every harness request carries this id
pub const HARNESS_REQUEST_ID: u64 = 1;

/// One operation to check
#[derive(Debug, Clone)]
pub struct SmokeStep {
    pub name: &'static str,
    pub method: Method,
    pub params: Params,
}

impl SmokeStep {
    pub fn new(method: Method, params: Params) -> Self {
        Self {
            name: method.as_str(),
            method,
            params,
        }
    }
}

/// The five operations, in daemon bring-up order
pub fn default_steps() -> Vec<SmokeStep> {
    Method::ALL
        .into_iter()
        .map(|method| {
            let mut params = Params::new();
            if method == Method::CaptureThumbnail {
                params.insert("index".to_string(), json!(0));
            }
            SmokeStep::new(method, params)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum SmokeOutcome {
    Passed,
    Failed {
        step: &'static str,
        response: Response,
    },
}

impl SmokeOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            SmokeOutcome::Passed => 0,
            SmokeOutcome::Failed { .. } => FAILURE_EXIT_CODE,
        }
    }
}

/// A client that sends every request with id 1
pub fn harness_client(settings: ClientSettings) -> OlaClient {
    OlaClient::with_id_source(settings, Arc::new(FixedId(HARNESS_REQUEST_ID)))
}

/// Run `steps` in order, writing one result line per step to `out`
pub async fn run_steps<W: Write>(
    client: &OlaClient,
    steps: &[SmokeStep],
    out: &mut W,
) -> OlaResult<SmokeOutcome> {
    for step in steps {
        let response = client.call(step.method, step.params.clone()).await;
        let rendered = serde_json::to_string(&response)?;

        if response.is_error() {
            writeln!(out, "[FAIL] {}: error field => {}", step.name, rendered)?;
            info!(step = step.name, "Smoke step failed");
            return Ok(SmokeOutcome::Failed {
                step: step.name,
                response,
            });
        }

        writeln!(out, "[OK] {}: {}", step.name, rendered)?;
    }

    writeln!(out, "All integration tests passed.")?;
    Ok(SmokeOutcome::Passed)
}
