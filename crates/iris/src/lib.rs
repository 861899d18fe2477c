//! # Iris
//!
//! **Pluggable async HTTP client with freeze-on-first-use configuration**
//!
//! Iris gives an application a single client façade whose concrete
//! transport is resolved lazily from a swappable provider:
//!
//! - **One call site** – application code talks to [`HttpClient`], never to
//!   a concrete transport
//! - **Freeze on first use** – configuration is snapshotted the first time
//!   any request is issued; later edits apply only to clients created
//!   afterwards
//! - **Swappable transport** – register a provider (or a ready transport)
//!   before first use to substitute the implementation, e.g. an in-memory
//!   recorder from `iris-test`
//! - **Request correlation** – every dispatch carries an `x-request-id`
//!   header and a matching `request_id` span field in structured logs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iris::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new();
//!     client.config().update(|c| c.redirect = RedirectPolicy::Disallow);
//!
//!     let response = client.get("https://example.com/users").send().await?;
//!     let users: serde_json::Value = response.json()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//! UNRESOLVED ──first send──▶ RESOLVED ──drop──▶ disposed
//!   config mutable            config/provider edits inert
//!   provider replaceable      all sends hit the cached transport
//! ```

#![doc(html_root_url = "https://docs.rs/iris/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use iris_core as core;

// Re-export the client facade
pub use iris_client as client;

// Re-export telemetry setup
pub use iris_telemetry as telemetry;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust,ignore
/// use iris::prelude::*;
/// ```
pub mod prelude {
    pub use iris_client::{
        ClientConfig, ClientError, ClientResult, ConfigHandle, HttpClient, RedirectPolicy,
        Request, Response, Transport, TransportError,
    };

    pub use iris_telemetry::{init_logging, LogConfig};
}
