//! In-memory test transports.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use http::{header, HeaderMap, StatusCode};
use parking_lot::Mutex;

use iris_core::{Request, Response, Transport, TransportError};

/// Computes a response for a recorded request.
type Responder = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// A transport double that records every request it receives.
///
/// Requests are appended to a synchronized list, so the double is safe to
/// share across concurrent callers. Responses come from a fixed value or a
/// responder function.
pub struct RecordingTransport {
    /// Every request received, in arrival order.
    requests: Mutex<Vec<Request>>,
    responder: Responder,
}

impl RecordingTransport {
    /// Creates a transport that answers every request with `200 OK` and an
    /// empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::with_status(StatusCode::OK)
    }

    /// Creates a transport that answers with the given status and an empty
    /// body.
    #[must_use]
    pub fn with_status(status: StatusCode) -> Self {
        Self::with_responder(move |_request| Response::new(status, HeaderMap::new(), ""))
    }

    /// Creates a transport that answers every request with a copy of the
    /// given response.
    #[must_use]
    pub fn with_response(response: Response) -> Self {
        Self::with_responder(move |_request| response.clone())
    }

    /// Creates a transport that computes each response from the request.
    #[must_use]
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    /// Creates a transport that echoes the request body and content type
    /// back in a `200 OK` response.
    #[must_use]
    pub fn echo() -> Self {
        Self::with_responder(|request| {
            let mut headers = HeaderMap::new();
            if let Some(content_type) = request.headers.get(header::CONTENT_TYPE) {
                headers.insert(header::CONTENT_TYPE, content_type.clone());
            }
            Response::new(StatusCode::OK, headers, request.body.clone())
        })
    }

    /// Returns a copy of every recorded request.
    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    /// Returns the number of recorded requests.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns the most recently recorded request.
    #[must_use]
    pub fn last_request(&self) -> Option<Request> {
        self.requests.lock().last().cloned()
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let response = (self.responder)(&request);
        self.requests.lock().push(request);
        Ok(response)
    }
}

/// A transport double that fails every request with a fixed error.
pub struct FailingTransport {
    error: TransportError,
    calls: AtomicUsize,
}

impl FailingTransport {
    /// Creates a transport that returns a clone of `error` on every send.
    #[must_use]
    pub fn new(error: TransportError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many times `send` was invoked.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _request: Request) -> Result<Response, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}
