//! Request building.

use crate::error::ClientError;
use bytes::Bytes;
use http::{header, HeaderMap, HeaderName, HeaderValue, Method, Uri};
use serde::Serialize;

/// An HTTP request ready to be handed to a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL
    pub url: Uri,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Bytes,
}

impl Request {
    /// Creates a new GET request builder.
    pub fn get(url: impl AsRef<str>) -> RequestBuilder {
        RequestBuilder::new(Method::GET, url)
    }

    /// Creates a new POST request builder.
    pub fn post(url: impl AsRef<str>) -> RequestBuilder {
        RequestBuilder::new(Method::POST, url)
    }

    /// Creates a new PUT request builder.
    pub fn put(url: impl AsRef<str>) -> RequestBuilder {
        RequestBuilder::new(Method::PUT, url)
    }

    /// Creates a new DELETE request builder.
    pub fn delete(url: impl AsRef<str>) -> RequestBuilder {
        RequestBuilder::new(Method::DELETE, url)
    }

    /// Creates a new HEAD request builder.
    pub fn head(url: impl AsRef<str>) -> RequestBuilder {
        RequestBuilder::new(Method::HEAD, url)
    }

    /// Returns the host component of the request URL.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.url.host()
    }

    /// Gets a header value as a string.
    #[must_use]
    pub fn header_str(&self, name: impl AsRef<str>) -> Option<&str> {
        self.headers.get(name.as_ref()).and_then(|v| v.to_str().ok())
    }

    /// Returns the Content-Type header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header_str(header::CONTENT_TYPE.as_str())
    }
}

/// Builder for constructing requests.
#[must_use]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Bytes>,
    error: Option<ClientError>,
}

impl RequestBuilder {
    /// Creates a new request builder.
    pub fn new(method: Method, url: impl AsRef<str>) -> Self {
        Self {
            method,
            url: url.as_ref().to_string(),
            headers: HeaderMap::new(),
            body: None,
            error: None,
        }
    }

    /// Sets a header on the request.
    ///
    /// An invalid header name or value is reported when [`build`](Self::build)
    /// is called.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        match (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            (Err(e), _) => {
                self.error = Some(ClientError::RequestBuild(format!(
                    "invalid header name '{}': {e}",
                    name.as_ref()
                )));
            }
            (_, Err(e)) => {
                self.error = Some(ClientError::RequestBuild(format!(
                    "invalid header value for '{}': {e}",
                    name.as_ref()
                )));
            }
        }
        self
    }

    /// Sets the Content-Type header.
    pub fn content_type(self, content_type: impl AsRef<str>) -> Self {
        self.header(header::CONTENT_TYPE.as_str(), content_type)
    }

    /// Sets the Accept header.
    pub fn accept(self, accept: impl AsRef<str>) -> Self {
        self.header(header::ACCEPT.as_str(), accept)
    }

    /// Sets the Authorization header with a Bearer token.
    pub fn bearer_token(self, token: impl AsRef<str>) -> Self {
        self.header(
            header::AUTHORIZATION.as_str(),
            format!("Bearer {}", token.as_ref()),
        )
    }

    /// Sets the raw request body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request body as JSON.
    ///
    /// This also sets the `Content-Type` header to
    /// `application/json; charset=utf-8`.
    pub fn json<T: Serialize>(mut self, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(bytes) => {
                self.body = Some(Bytes::from(bytes));
                self.content_type("application/json; charset=utf-8")
            }
            Err(e) => {
                self.error = Some(ClientError::Json(e));
                self
            }
        }
    }

    /// Builds the request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestBuild`] if the URL is not an absolute
    /// HTTP(S) URL or any header was invalid.
    pub fn build(self) -> Result<Request, ClientError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let url: Uri = self
            .url
            .parse()
            .map_err(|e| ClientError::RequestBuild(format!("invalid URL '{}': {e}", self.url)))?;

        if url.scheme().is_none() || url.host().is_none() {
            return Err(ClientError::RequestBuild(format!(
                "URL '{}' must be absolute",
                self.url
            )));
        }

        Ok(Request {
            method: self.method,
            url,
            headers: self.headers,
            body: self.body.unwrap_or_default(),
        })
    }
}
