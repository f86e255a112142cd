use std::path::Path;

use serde::Deserialize;

use crate::error::ServerLibError;

/// Settings handed to server implementations at construction time.
///
/// Typically bound once through `ServerRegistry::register_with`, so every
/// instance the registry builds receives its own clone.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Value advertised in the `Server` response header.
    pub server_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            server_name: "serverlib".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parses a TOML document. Missing keys fall back to [`ServerConfig::default`].
    pub fn from_toml_str(source: &str) -> Result<Self, ServerLibError> {
        let config: ServerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServerLibError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!("ServerConfig: loading {}", path.display());
        Self::from_toml_str(&source)
    }

    /// `host:port`, as a listener would bind it.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<(), ServerLibError> {
        if self.host.trim().is_empty() {
            return Err(ServerLibError::Config("host must not be empty".to_string()));
        }
        Ok(())
    }
}
