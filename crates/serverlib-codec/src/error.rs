use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to serialize response entity: {0}")]
    Serialize(#[from] serde_json::Error),
}
