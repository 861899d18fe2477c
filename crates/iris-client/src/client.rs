//! The client façade.

use std::sync::Arc;

use http::{HeaderName, HeaderValue, Method};
use tracing::Instrument;
use uuid::Uuid;

use iris_core::{ClientResult, Request, RequestBuilder, Response, SharedTransport};

use crate::config::{ClientConfig, ConfigHandle};
use crate::net::NetTransport;
use crate::registry::{Provider, TransportRegistry};

/// Header carrying the per-request correlation identifier.
pub static HEADER_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// The single entry point application code uses to issue requests.
///
/// The client resolves its transport lazily: the first call to
/// [`send`](Self::send) (or any convenience method) snapshots the
/// configuration, invokes the active provider once, and caches the produced
/// transport for the client's remaining lifetime. See the crate docs for
/// the full lifecycle.
///
/// Dropping the client drops the cached transport and releases whatever
/// resources it held.
#[derive(Debug)]
pub struct HttpClient {
    /// Shared configuration handle; the application may hold clones.
    config: ConfigHandle,
    /// Provider slot and resolved-transport cache, owned per instance.
    registry: TransportRegistry,
}

impl HttpClient {
    /// Creates a client with default configuration and the networked
    /// transport provider.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with the given configuration.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_config_handle(ConfigHandle::new(config))
    }

    /// Creates a client sharing an existing configuration handle.
    ///
    /// The client holds the handle itself, not a copy: edits made through
    /// any clone of the handle before the first request are visible here.
    #[must_use]
    pub fn with_config_handle(config: ConfigHandle) -> Self {
        let default_provider: Provider = Arc::new(|config: &ClientConfig| {
            NetTransport::from_config(config).map(|t| Arc::new(t) as SharedTransport)
        });
        Self {
            config,
            registry: TransportRegistry::new(default_provider),
        }
    }

    /// Returns the mutable configuration handle.
    #[must_use]
    pub fn config(&self) -> ConfigHandle {
        self.config.clone()
    }

    /// Replaces the active transport provider.
    ///
    /// Must be called before the first request to take effect; afterwards
    /// the registration is stored but the resolved transport stays in use.
    pub fn register_provider<F>(&self, provider: F)
    where
        F: Fn(&ClientConfig) -> ClientResult<SharedTransport> + Send + Sync + 'static,
    {
        self.registry.register(Arc::new(provider));
    }

    /// Registers a provider that always returns the given transport.
    pub fn register_transport(&self, transport: SharedTransport) {
        self.register_provider(move |_config| Ok(transport.clone()));
    }

    /// Creates a GET request builder bound to this client.
    pub fn get(&self, url: impl AsRef<str>) -> ClientRequest<'_> {
        self.request(Method::GET, url)
    }

    /// Creates a POST request builder bound to this client.
    pub fn post(&self, url: impl AsRef<str>) -> ClientRequest<'_> {
        self.request(Method::POST, url)
    }

    /// Creates a PUT request builder bound to this client.
    pub fn put(&self, url: impl AsRef<str>) -> ClientRequest<'_> {
        self.request(Method::PUT, url)
    }

    /// Creates a DELETE request builder bound to this client.
    pub fn delete(&self, url: impl AsRef<str>) -> ClientRequest<'_> {
        self.request(Method::DELETE, url)
    }

    /// Creates a HEAD request builder bound to this client.
    pub fn head(&self, url: impl AsRef<str>) -> ClientRequest<'_> {
        self.request(Method::HEAD, url)
    }

    /// Creates a request builder with a custom method.
    pub fn request(&self, method: Method, url: impl AsRef<str>) -> ClientRequest<'_> {
        ClientRequest {
            client: self,
            builder: RequestBuilder::new(method, url),
        }
    }

    /// Sends a request through the resolved transport.
    ///
    /// Triggers resolution on first use. A correlation identifier is
    /// attached to the outgoing request (`x-request-id` header, unless the
    /// caller already set one) and to the tracing span wrapping the
    /// dispatch, so log records can be matched to their request.
    ///
    /// # Errors
    ///
    /// Transport failures propagate unchanged; resolution failures surface
    /// as [`ClientError::Construction`](iris_core::ClientError::Construction).
    pub async fn send(&self, mut request: Request) -> ClientResult<Response> {
        let request_id = Uuid::now_v7().to_string();
        let span = tracing::info_span!(
            "client_request",
            request_id = %request_id,
            method = %request.method,
            url = %request.url,
        );

        async {
            let transport = self.resolve()?;

            if !request.headers.contains_key(&HEADER_REQUEST_ID) {
                if let Ok(value) = HeaderValue::from_str(&request_id) {
                    request.headers.insert(HEADER_REQUEST_ID.clone(), value);
                }
            }

            tracing::debug!("dispatching request");
            let response = transport.send(request).await?;
            tracing::debug!(status = response.status_code(), "response received");

            Ok(response)
        }
        .instrument(span)
        .await
    }

    /// Returns true once the transport has been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.registry.is_resolved()
    }

    /// Snapshots the configuration and resolves the transport.
    fn resolve(&self) -> ClientResult<SharedTransport> {
        let snapshot = self.config.snapshot();
        self.registry.resolve(&snapshot)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// A request builder bound to a client.
#[must_use]
pub struct ClientRequest<'a> {
    client: &'a HttpClient,
    builder: RequestBuilder,
}

impl ClientRequest<'_> {
    /// Sets a header on the request.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    /// Sets the Content-Type header.
    pub fn content_type(mut self, content_type: impl AsRef<str>) -> Self {
        self.builder = self.builder.content_type(content_type);
        self
    }

    /// Sets the Accept header.
    pub fn accept(mut self, accept: impl AsRef<str>) -> Self {
        self.builder = self.builder.accept(accept);
        self
    }

    /// Sets the Authorization header with a Bearer token.
    pub fn bearer_token(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_token(token);
        self
    }

    /// Sets the raw request body.
    pub fn body(mut self, body: impl Into<bytes::Bytes>) -> Self {
        self.builder = self.builder.body(body);
        self
    }

    /// Sets the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Self {
        self.builder = self.builder.json(value);
        self
    }

    /// Builds the request and sends it through the client.
    pub async fn send(self) -> ClientResult<Response> {
        let request = self.builder.build()?;
        self.client.send(request).await
    }
}
