//! Newline framing over a Unix domain socket
//!
//! One connection carries exactly one request line and one response line.

use std::io;
use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::trace;

/// Size of each read from the socket
pub const READ_CHUNK_SIZE: usize = 4096;

/// A single-use line connection to the daemon
///
/// The underlying stream is closed when this value is dropped, so every
/// exit path out of a call releases the socket.
#[derive(Debug)]
pub struct LineConnection {
    stream: UnixStream,
}

impl LineConnection {
    /// Connect to the socket at `path`
    pub async fn connect<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let stream = UnixStream::connect(path.as_ref()).await?;
        trace!(socket = %path.as_ref().display(), "Connected");
        Ok(Self { stream })
    }

    /// Wrap an already-connected stream
    pub fn from_stream(stream: UnixStream) -> Self {
        Self { stream }
    }

    /// Write `line` in full and flush
    pub async fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.stream.write_all(line.as_bytes()).await?;
        self.stream.flush().await?;
        trace!(bytes = line.len(), "Request written");
        Ok(())
    }

    /// Read until a newline has been seen or the peer closes
    ///
    /// Returns every byte received, which may extend past the first newline
    /// when the peer sent more in the same chunk. An empty buffer means the
    /// peer closed without sending anything.
    pub async fn read_until_newline(&mut self) -> io::Result<Vec<u8>> {
        let mut data = Vec::new();
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        loop {
            let n = self.stream.read(&mut chunk).await?;
            if n == 0 {
                trace!(bytes = data.len(), "Peer closed connection");
                break;
            }
            data.extend_from_slice(&chunk[..n]);
            if chunk[..n].contains(&b'\n') {
                break;
            }
        }

        Ok(data)
    }
}

impl Drop for LineConnection {
    fn drop(&mut self) {
        trace!("Connection closed");
    }
}

/// The first line of `data`, without its terminator
///
/// When no newline is present the whole buffer is the line.
pub fn first_line(data: &[u8]) -> &[u8] {
    match data.iter().position(|&b| b == b'\n') {
        Some(end) => &data[..end],
        None => data,
    }
}
