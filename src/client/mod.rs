//! Client-side functionality for Ola
//!
//! This module contains the client for talking to the Ola daemon over a Unix
//! domain socket, one connection per request.
//!
//! Uses the envelope types from `crate::protocol`.

pub mod error;
pub mod ids;
pub mod transport;

pub use error::CallError;
pub use ids::{FixedId, IdSource, SequentialIds};
pub use transport::OlaClient;

pub use crate::protocol::{Method, Params, Request, Response};
