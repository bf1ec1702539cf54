//! CLI utility functions.

use anyhow::Result;

use crate::protocol::{Response, ALL_METHODS};

/// One-line usage hint listing every command
pub fn usage_line() -> String {
    format!("Usage: ola [{}]", ALL_METHODS.join("|"))
}

/// Render an envelope as JSON
pub fn render_envelope(response: &Response, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(rendered)
}

/// Print an envelope to stdout
pub fn print_envelope(response: &Response, pretty: bool) -> Result<()> {
    println!("{}", render_envelope(response, pretty)?);
    Ok(())
}
