//! Remote call errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    /// The remote answered a write with a non-success status.
    #[error("Remote API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
}
