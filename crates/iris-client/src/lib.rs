//! # Iris Client
//!
//! The Iris HTTP client façade: a single call site application code uses to
//! issue requests, hiding how the concrete transport is obtained.
//!
//! ## Lifecycle
//!
//! A client starts *unresolved*: its configuration is mutable through the
//! shared [`ConfigHandle`] and its transport provider is replaceable. The
//! first request resolves the client: the configuration is snapshotted, the
//! active provider is invoked exactly once, and the produced transport is
//! cached for the client's remaining lifetime.
//!
//! ```text
//! UNRESOLVED ──first send──▶ RESOLVED
//!   config mutable            config edits inert for the cached transport
//!   provider replaceable      provider replacements inert
//! ```
//!
//! Configuration and provider changes after resolution succeed at the
//! storage level but never reach the already-resolved transport. A client
//! constructed later picks up the current stored values.
//!
//! ## Example
//!
//! ```rust,ignore
//! use iris_client::{ClientConfig, HttpClient, RedirectPolicy};
//!
//! let client = HttpClient::new();
//! client.config().update(|c| c.redirect = RedirectPolicy::Disallow);
//!
//! let response = client.get("https://example.com/users").send().await?;
//! assert!(response.is_success());
//! ```

#![doc(html_root_url = "https://docs.rs/iris-client/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod net;
mod registry;

pub use client::{ClientRequest, HttpClient, HEADER_REQUEST_ID};
pub use config::{ClientConfig, ConfigHandle, RedirectPolicy};
pub use net::NetTransport;
pub use registry::{Provider, TransportRegistry};

// Re-export the core types the client surface is built from.
pub use iris_core::{
    ClientError, ClientResult, Request, RequestBuilder, Response, SharedTransport, Transport,
    TransportError,
};
