//! The transport trait concrete client implementations satisfy.

use crate::error::TransportError;
use crate::request::Request;
use crate::response::Response;
use async_trait::async_trait;
use std::sync::Arc;

/// A shared, reference-counted transport.
pub type SharedTransport = Arc<dyn Transport>;

/// Anything able to execute a request and produce a response.
///
/// Implementations must be safe to share across concurrent callers:
/// [`send`](Self::send) may be invoked from many tasks at once. A send
/// suspends only its caller; it must never block unrelated tasks.
///
/// Resources held by a transport (connections, pools) are released when the
/// last reference to it is dropped.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes the request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on connection failure, timeout, or any
    /// other transport-level fault. Callers receive the error unchanged.
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}
