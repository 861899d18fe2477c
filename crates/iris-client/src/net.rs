//! Networked transport backed by reqwest.

use async_trait::async_trait;
use reqwest::redirect;

use iris_core::{ClientError, ClientResult, Request, Response, Transport, TransportError};

use crate::config::{ClientConfig, RedirectPolicy};

/// The default networked transport, built from a frozen [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct NetTransport {
    client: reqwest::Client,
}

impl NetTransport {
    /// Builds a transport from a configuration snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Construction`] if the underlying client
    /// cannot be built (e.g. no TLS backend available).
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(redirect_policy(config.redirect))
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(config.user_agent.clone());

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Construction(format!("failed to build transport: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for NetTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.to_string())
            .headers(request.headers.clone());

        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder.send().await.map_err(map_transport_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::body(e.to_string()))?;

        Ok(Response::new(status, headers, body))
    }
}

/// Maps a redirect policy to the underlying client's policy.
fn redirect_policy(policy: RedirectPolicy) -> redirect::Policy {
    match policy {
        RedirectPolicy::Disallow => redirect::Policy::none(),
        RedirectPolicy::Follow {
            max_hops,
            allow_cycles,
        } => {
            if allow_cycles {
                redirect::Policy::limited(max_hops)
            } else {
                redirect::Policy::custom(move |attempt| {
                    if attempt.previous().len() > max_hops {
                        attempt.error("too many redirects")
                    } else if attempt.previous().contains(attempt.url()) {
                        attempt.error("redirect cycle detected")
                    } else {
                        attempt.follow()
                    }
                })
            }
        }
    }
}

/// Classifies an underlying client error without altering its message.
fn map_transport_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::connect(e.to_string())
    } else if e.is_redirect() {
        TransportError::redirect(e.to_string())
    } else if e.is_body() || e.is_decode() {
        TransportError::body(e.to_string())
    } else {
        TransportError::other(e.to_string())
    }
}
