//! Request and response envelopes
//!
//! Each envelope travels as a single line of JSON terminated by `\n`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::methods::Method;

/// Method parameters: always a JSON object, possibly empty
pub type Params = serde_json::Map<String, serde_json::Value>;

/// A request to the daemon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Client-assigned request identifier
    pub id: u64,
    /// Method name to invoke
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Params,
}

impl Request {
    pub fn new(id: u64, method: Method, params: Params) -> Self {
        Self {
            id,
            method: method.as_str().to_string(),
            params,
        }
    }

    /// Encode as one newline-terminated line
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

/// A response from the daemon, or a locally produced failure envelope
///
/// Every key is optional on the wire; missing keys decode as `None`.
/// All three keys are always written, as `null` when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Echo of the request id (`null` when the daemon could not parse the request)
    #[serde(default)]
    pub id: Option<u64>,
    /// Result value on success
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Error message on failure
    #[serde(default)]
    pub error: Option<String>,
}

impl Response {
    /// Create a success response
    pub fn success(id: u64, result: serde_json::Value) -> Self {
        Self {
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    /// Create a failure envelope for the given request id
    pub fn failure(id: u64, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            result: None,
            error: Some(message.into()),
        }
    }

    /// Parse a single response line (without its trailing newline)
    pub fn from_line(line: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(line)
    }

    /// A response is a failure when it carries a non-empty error string,
    /// whatever `result` holds.
    pub fn is_error(&self) -> bool {
        self.error_message().is_some()
    }

    /// The error string, if non-empty
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Decode `result` into a typed value
    ///
    /// An absent result decodes as JSON `null`.
    pub fn decode_result<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let value = self.result.clone().unwrap_or(serde_json::Value::Null);
        serde_json::from_value(value)
    }
}
