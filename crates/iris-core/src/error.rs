//! Client error types.

use thiserror::Error;

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures produced by a transport while executing a request.
///
/// The client façade performs no translation on these: whatever the
/// transport returns surfaces to the caller unchanged.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The connection to the remote host could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request did not complete within the transport's deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The response body could not be read or decoded.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Redirect handling failed (limit exceeded or cycle detected).
    #[error("redirect error: {0}")]
    Redirect(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Creates a connection error.
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Creates a body read error.
    pub fn body(message: impl Into<String>) -> Self {
        Self::Body(message.into())
    }

    /// Creates a redirect error.
    pub fn redirect(message: impl Into<String>) -> Self {
        Self::Redirect(message.into())
    }

    /// Creates a generic transport error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Errors surfaced by the client façade.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be built (invalid URL, header, or body).
    #[error("request build error: {0}")]
    RequestBuild(String),

    /// The transport provider failed to construct a transport.
    #[error("transport construction failed: {0}")]
    Construction(String),

    /// The response body could not be decoded as text.
    #[error("failed to decode body: {0}")]
    BodyDecode(String),

    /// The transport failed while executing the request.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
