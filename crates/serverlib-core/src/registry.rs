use core::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::server::{Server, ServerFactory, ServerImpl, ServerPtr};

/// Conventional key for the first server an application registers.
pub const DEFAULT_SERVER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

/// Maps server ids to constructors and memoizes one default instance.
///
/// ## Registration Order
/// Factories live in an insertion-ordered map. The default server is always
/// built from whichever factory is currently first in registration order,
/// never from the lexically smallest id.
///
/// ## Concurrency
/// There is no internal locking. Mutation takes `&mut self`; callers that
/// share a registry across threads wrap it in their own `Mutex`.
pub struct ServerRegistry {
    factories: IndexMap<String, ServerFactory>,
    default_instance: Option<ServerPtr>,
}

static_assertions::assert_impl_all!(ServerRegistry: Send, Sync);

impl fmt::Debug for ServerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerRegistry")
            .field("ids", &self.factories.keys().collect::<Vec<_>>())
            .field("default_cached", &self.default_instance.is_some())
            .finish()
    }
}

impl Default for ServerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerRegistry {
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
            default_instance: None,
        }
    }

    /// Registers a default-constructible server type under `id`.
    ///
    /// Returns `false` without touching the registry if `id` is taken.
    pub fn register<T>(&mut self, id: &str) -> bool
    where
        T: Server + Default + 'static,
    {
        self.register_factory(id, || Arc::new(T::default()) as ServerPtr)
    }

    /// Registers a server type built from arguments bound now.
    ///
    /// The factory keeps `args` and clones them for every construction, so
    /// each instance gets an independent copy.
    pub fn register_with<T, A>(&mut self, id: &str, args: A) -> bool
    where
        T: Server + From<A> + 'static,
        A: Clone + Send + Sync + 'static,
    {
        self.register_factory(id, move || Arc::new(T::from(args.clone())) as ServerPtr)
    }

    /// Registers a server type under the id it declares for itself.
    pub fn register_impl<T>(&mut self) -> bool
    where
        T: ServerImpl + Default + 'static,
    {
        self.register::<T>(T::SERVER_ID)
    }

    /// Registers an arbitrary constructor closure.
    pub fn register_factory<F>(&mut self, id: &str, factory: F) -> bool
    where
        F: Fn() -> ServerPtr + Send + Sync + 'static,
    {
        if self.factories.contains_key(id) {
            tracing::warn!("ServerRegistry: '{}' is already registered, ignoring", id);
            return false;
        }

        self.factories.insert(id.to_string(), Box::new(factory));
        tracing::info!(
            "ServerRegistry: registered '{}' ({} total)",
            id,
            self.factories.len()
        );
        true
    }

    /// Builds a fresh server for `id`. Never memoized.
    pub fn get_server(&self, id: &str) -> Option<ServerPtr> {
        let factory = self.factories.get(id)?;
        let server = factory();
        tracing::debug!("ServerRegistry: constructed '{}' as {}", id, server.name());
        Some(server)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Removes the factory for `id`.
    ///
    /// On removal the cached default is dropped whether or not it was built
    /// from `id`; the next [`ServerRegistry::get_default_server`] rebuilds
    /// from the factory that is now first.
    pub fn unregister_server(&mut self, id: &str) -> bool {
        if self.factories.shift_remove(id).is_none() {
            return false;
        }

        self.default_instance = None;
        tracing::info!("ServerRegistry: unregistered '{}', default invalidated", id);
        true
    }

    pub fn registered_count(&self) -> usize {
        self.factories.len()
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.factories.clear();
        self.default_instance = None;
        tracing::info!("ServerRegistry: cleared");
    }

    /// Returns the shared default server, building it on first use.
    ///
    /// Every caller receives the same instance until the cache is
    /// invalidated by `unregister_server` or `clear`. The server is not
    /// started.
    pub fn get_default_server(&mut self) -> Option<ServerPtr> {
        if let Some(server) = &self.default_instance {
            return Some(Arc::clone(server));
        }

        let (id, factory) = self.factories.first()?;
        let server = factory();
        tracing::debug!("ServerRegistry: default server built from '{}'", id);

        self.default_instance = Some(Arc::clone(&server));
        Some(server)
    }
}
