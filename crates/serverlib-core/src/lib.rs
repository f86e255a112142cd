//! Server registry: string-keyed factories for server implementations
//! plus one memoized default instance.
//!
//! ```
//! use serverlib_core::{Server, ServerLibError, ServerRegistry, DEFAULT_SERVER_ID};
//!
//! #[derive(Default)]
//! struct Idle;
//!
//! impl Server for Idle {
//!     fn start(&self) -> Result<(), ServerLibError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = ServerRegistry::new();
//! assert!(registry.register::<Idle>(DEFAULT_SERVER_ID));
//! assert!(!registry.register::<Idle>(DEFAULT_SERVER_ID));
//!
//! let a = registry.get_default_server().unwrap();
//! let b = registry.get_default_server().unwrap();
//! assert!(std::sync::Arc::ptr_eq(&a, &b));
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod server;

pub use config::ServerConfig;
pub use error::ServerLibError;
pub use registry::{ServerRegistry, DEFAULT_SERVER_ID};
pub use server::{Server, ServerFactory, ServerImpl, ServerPtr};
