//! # Iris Telemetry
//!
//! Structured logging setup for applications using the Iris HTTP client.
//!
//! The client library itself only *emits* tracing spans and events; this
//! crate owns subscriber initialization. Every request dispatched through
//! the client carries a `request_id` span field, so a JSON log pipeline can
//! correlate each response and error with the request that produced it.
//!
//! # Example
//!
//! ```rust,ignore
//! use iris_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::production())?;
//!
//! tracing::info!(request_id = "0192...", "request completed");
//! ```

#![doc(html_root_url = "https://docs.rs/iris-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogConfig};

/// Standard log field names used by the client.
///
/// Use these names when adding fields to your own spans so records line up
/// with the ones the client emits.
pub mod fields {
    /// Request correlation identifier field name.
    pub const REQUEST_ID: &str = "request_id";

    /// HTTP method field name.
    pub const HTTP_METHOD: &str = "method";

    /// Request URL field name.
    pub const HTTP_URL: &str = "url";

    /// HTTP status code field name.
    pub const HTTP_STATUS: &str = "status";

    /// Error field name.
    pub const ERROR: &str = "error";
}
