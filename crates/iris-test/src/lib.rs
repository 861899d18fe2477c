//! # Iris Test
//!
//! In-memory transports for testing code that uses the Iris HTTP client,
//! plus assertion helpers for responses. No network connections, no port
//! binding: register a [`RecordingTransport`] as the client's provider and
//! every request it would have sent is captured for verification.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use iris_client::HttpClient;
//! use iris_test::RecordingTransport;
//!
//! #[tokio::test]
//! async fn test_fetches_user() {
//!     let recorder = Arc::new(RecordingTransport::new());
//!     let client = HttpClient::new();
//!     client.register_transport(recorder.clone());
//!
//!     client.get("http://api.example.com/users/123").send().await.unwrap();
//!
//!     assert_eq!(recorder.request_count(), 1);
//!     assert_eq!(recorder.last_request().unwrap().host(), Some("api.example.com"));
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/iris-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assert;
mod transport;

pub use assert::ResponseExt;
pub use transport::{FailingTransport, RecordingTransport};
