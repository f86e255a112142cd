use std::sync::Arc;

use crate::error::ServerLibError;

/// The capability every registered server implementation provides.
///
/// The registry only ever constructs servers. `start` belongs to whoever
/// receives the handle; the registry never calls it.
pub trait Server: Send + Sync {
    fn start(&self) -> Result<(), ServerLibError>;

    /// Label used in log lines.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a constructed server.
pub type ServerPtr = Arc<dyn Server>;

/// A zero-argument constructor that owns whatever arguments were bound at
/// registration time.
pub type ServerFactory = Box<dyn Fn() -> ServerPtr + Send + Sync>;

/// A server type that carries its own registry key.
///
/// ```
/// use serverlib_core::{Server, ServerImpl, ServerLibError, ServerRegistry};
///
/// #[derive(Default)]
/// struct Plain;
///
/// impl Server for Plain {
///     fn start(&self) -> Result<(), ServerLibError> {
///         Ok(())
///     }
/// }
///
/// impl ServerImpl for Plain {
///     const SERVER_ID: &'static str = "plain";
/// }
///
/// let mut registry = ServerRegistry::new();
/// assert!(registry.register_impl::<Plain>());
/// assert!(registry.is_registered("plain"));
/// ```
pub trait ServerImpl: Server {
    const SERVER_ID: &'static str;
}
