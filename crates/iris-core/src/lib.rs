//! # Iris Core
//!
//! Transport-agnostic types for the Iris HTTP client: the [`Request`] and
//! [`Response`] value types, the [`Transport`] trait that concrete client
//! implementations satisfy, and the error taxonomy.
//!
//! This crate has no I/O dependencies. It defines *what* a transport must
//! be able to do; the `iris-client` crate supplies the default networked
//! implementation and `iris-test` supplies in-memory doubles.

#![doc(html_root_url = "https://docs.rs/iris-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod request;
mod response;
mod transport;

pub use error::{ClientError, ClientResult, TransportError};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use transport::{SharedTransport, Transport};
