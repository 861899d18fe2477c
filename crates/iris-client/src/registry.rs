//! Provider slot and one-time transport resolution.
//!
//! Each client instance owns its own registry; there is no process-global
//! state. The registry holds the active provider and the resolved-transport
//! cache, an exchange-once cell: concurrent first resolvers serialize on a
//! construction lock, exactly one provider invocation wins, and every later
//! call reads the cache.

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, RwLock};

use iris_core::{ClientResult, SharedTransport};

use crate::config::ClientConfig;

/// A factory producing a transport from the frozen configuration snapshot.
pub type Provider = Arc<dyn Fn(&ClientConfig) -> ClientResult<SharedTransport> + Send + Sync>;

/// Holds the active provider and the resolved transport for one client.
pub struct TransportRegistry {
    /// Replaceable factory slot. Exactly one provider is active at a time.
    provider: RwLock<Provider>,
    /// Cache written at most once, read for the client's remaining lifetime.
    resolved: OnceLock<SharedTransport>,
    /// Serializes first construction so the provider runs at most once.
    construction: Mutex<()>,
}

impl TransportRegistry {
    /// Creates a registry with the given initial provider.
    #[must_use]
    pub fn new(provider: Provider) -> Self {
        Self {
            provider: RwLock::new(provider),
            resolved: OnceLock::new(),
            construction: Mutex::new(()),
        }
    }

    /// Replaces the active provider.
    ///
    /// Registering before first resolution overwrites the prior provider
    /// with no other effect. Registering after resolution is accepted and
    /// stored but never consulted again by this registry; a warning is
    /// logged since the caller's intent cannot take effect.
    pub fn register(&self, provider: Provider) {
        if self.is_resolved() {
            tracing::warn!(
                "transport already resolved; newly registered provider will not take effect"
            );
        }
        *self.provider.write() = provider;
    }

    /// Returns the cached transport, constructing it on first call.
    ///
    /// The first call invokes the active provider with `config` and caches
    /// the result. Construction runs under a lock, so concurrent first
    /// callers produce exactly one transport. A provider failure is
    /// returned to the caller and not cached; the next call retries.
    pub fn resolve(&self, config: &ClientConfig) -> ClientResult<SharedTransport> {
        if let Some(transport) = self.resolved.get() {
            return Ok(transport.clone());
        }

        let _guard = self.construction.lock();
        // Another caller may have finished construction while we waited.
        if let Some(transport) = self.resolved.get() {
            return Ok(transport.clone());
        }

        let provider = self.provider.read().clone();
        let transport = provider(config)?;
        let _ = self.resolved.set(transport.clone());

        tracing::debug!(redirect = ?config.redirect, "transport resolved");
        Ok(transport)
    }

    /// Returns true once a transport has been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl fmt::Debug for TransportRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportRegistry")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use http::{HeaderMap, StatusCode};
    use iris_core::{Request, Response, Transport, TransportError};

    struct NullTransport;

    #[async_trait]
    impl Transport for NullTransport {
        async fn send(&self, _request: Request) -> Result<Response, TransportError> {
            Ok(Response::new(StatusCode::OK, HeaderMap::new(), ""))
        }
    }

    fn counting_provider(calls: Arc<AtomicUsize>) -> Provider {
        Arc::new(move |_config| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(NullTransport) as SharedTransport)
        })
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = TransportRegistry::new(counting_provider(calls.clone()));
        let config = ClientConfig::default();

        let first = registry.resolve(&config).unwrap();
        let second = registry.resolve(&config).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_concurrent_resolution_constructs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = Arc::new(TransportRegistry::new(counting_provider(calls.clone())));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    registry.resolve(&ClientConfig::default()).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_register_before_resolution_replaces_provider() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let registry = TransportRegistry::new(counting_provider(first.clone()));

        registry.register(counting_provider(second.clone()));
        registry.resolve(&ClientConfig::default()).unwrap();

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_register_after_resolution_is_inert() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let registry = TransportRegistry::new(counting_provider(first.clone()));

        let resolved = registry.resolve(&ClientConfig::default()).unwrap();
        registry.register(counting_provider(second.clone()));
        let still = registry.resolve(&ClientConfig::default()).unwrap();

        assert!(Arc::ptr_eq(&resolved, &still));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_construction_failure_is_not_cached() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();
        let provider: Provider = Arc::new(move |_config| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(iris_core::ClientError::Construction("first boot".to_string()))
            } else {
                Ok(Arc::new(NullTransport) as SharedTransport)
            }
        });
        let registry = TransportRegistry::new(provider);
        let config = ClientConfig::default();

        assert!(registry.resolve(&config).is_err());
        assert!(!registry.is_resolved());
        assert!(registry.resolve(&config).is_ok());
        assert!(registry.is_resolved());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
