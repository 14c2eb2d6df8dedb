use airdrop_merkle::MerkleError;
use thiserror::Error;

pub type FixtureResult<T> = Result<T, FixtureError>;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Merkle error: {0}")]
    Merkle(#[from] MerkleError),

    #[error("Schema validation error: {0}")]
    SchemaValidation(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Generator exhausted: {0}")]
    GeneratorExhausted(String),
}
