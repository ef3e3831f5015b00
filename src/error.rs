//! Error types for trafodion-client.

use thiserror::Error;

/// Result type for trafodion-client operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for trafodion-client.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller misuse detectable without contacting the server
    /// (cursor not connected, malformed operation text).
    #[error("programming error: {0}")]
    Programming(String),

    /// Protocol-level mismatch between caller expectation and server
    /// behavior (e.g. multiple results without multi-statement mode).
    #[error("interface error: {0}")]
    Interface(String),

    /// Cursor used inconsistently with its statement's nature.
    #[error("internal error: {0}")]
    Internal(String),

    /// I/O error from a transport implementation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Opaque failure reported by the transport; never retried here.
    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Returns true if the error originated in the transport rather than in
    /// how the cursor was used.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Transport(_))
    }

    /// Returns true if the error indicates caller misuse rather than a
    /// server or transport failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Programming(_) | Error::Interface(_) | Error::Internal(_)
        )
    }
}
