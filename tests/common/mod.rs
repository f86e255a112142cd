#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use serverlib_core::{Server, ServerConfig, ServerImpl, ServerLibError};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_test_writer()
        .try_init();
}

/// Counts `start` calls so tests can prove the registry never starts servers.
#[derive(Default)]
pub struct AlphaServer {
    pub starts: AtomicUsize,
}

impl Server for AlphaServer {
    fn start(&self) -> Result<(), ServerLibError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        "alpha"
    }
}

#[derive(Default)]
pub struct BetaServer;

impl Server for BetaServer {
    fn start(&self) -> Result<(), ServerLibError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "beta"
    }
}

impl ServerImpl for BetaServer {
    const SERVER_ID: &'static str = "beta-impl";
}

/// Built from a bound `ServerConfig`.
pub struct ConfiguredServer {
    pub config: ServerConfig,
}

impl From<ServerConfig> for ConfiguredServer {
    fn from(config: ServerConfig) -> Self {
        Self { config }
    }
}

impl Server for ConfiguredServer {
    fn start(&self) -> Result<(), ServerLibError> {
        if self.config.port == 0 {
            return Err(ServerLibError::Start("port 0 is reserved".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.config.server_name
    }
}
