//! Client configuration.
//!
//! [`ClientConfig`] is a plain value; [`ConfigHandle`] is the shared mutable
//! handle the application and the client both hold. Edits made through any
//! clone of the handle are visible to the client until its transport is
//! resolved; after that the resolved transport keeps the configuration that
//! was snapshotted at resolution time.

use std::time::Duration;

use parking_lot::RwLock;
use std::sync::Arc;

/// How the transport treats redirect responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Never follow redirects; 3xx responses are returned as-is.
    Disallow,
    /// Follow redirects up to a hop bound.
    Follow {
        /// Maximum number of redirect hops before the transport errors.
        max_hops: usize,
        /// Whether a redirect chain may revisit a URL.
        allow_cycles: bool,
    },
}

impl RedirectPolicy {
    /// Follow up to `max_hops` redirects, rejecting cycles.
    #[must_use]
    pub fn follow(max_hops: usize) -> Self {
        Self::Follow {
            max_hops,
            allow_cycles: false,
        }
    }
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::follow(5)
    }
}

/// Transport options captured at resolution time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Redirect handling policy.
    pub redirect: RedirectPolicy,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Total per-request deadline. `None` means no deadline.
    pub request_timeout: Option<Duration>,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            redirect: RedirectPolicy::default(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            user_agent: concat!("iris/", env!("CARGO_PKG_VERSION")).to_string(),
            pool_max_idle_per_host: 100,
        }
    }
}

/// Shared mutable handle to a [`ClientConfig`].
///
/// Cloning the handle shares the same underlying value, so edits made
/// through one clone are visible through every other. The client snapshots
/// the value at resolution time; writes after that still succeed but do not
/// affect the resolved transport.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<ClientConfig>>,
}

impl ConfigHandle {
    /// Wraps a configuration value in a shared handle.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Returns a copy of the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> ClientConfig {
        self.inner.read().clone()
    }

    /// Replaces the stored configuration.
    pub fn set(&self, config: ClientConfig) {
        *self.inner.write() = config;
    }

    /// Edits the stored configuration in place.
    pub fn update(&self, f: impl FnOnce(&mut ClientConfig)) {
        f(&mut self.inner.write());
    }

    /// Returns the current redirect policy.
    #[must_use]
    pub fn redirect(&self) -> RedirectPolicy {
        self.inner.read().redirect
    }

    /// Sets the redirect policy.
    pub fn set_redirect(&self, policy: RedirectPolicy) {
        self.inner.write().redirect = policy;
    }
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
