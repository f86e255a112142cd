use thiserror::Error;

/// Failures of the ambient paths around the registry.
///
/// Registry operations themselves never fail; they answer with `bool` or
/// `Option`. These variants cover configuration loading and the `start`
/// capability that server implementations provide.
#[derive(Debug, Error)]
pub enum ServerLibError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Server failed to start: {0}")]
    Start(String),
}

impl From<toml::de::Error> for ServerLibError {
    fn from(e: toml::de::Error) -> Self {
        ServerLibError::Config(e.to_string())
    }
}
