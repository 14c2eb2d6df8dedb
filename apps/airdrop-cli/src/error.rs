use airdrop_fixtures::FixtureError;
use airdrop_merkle::MerkleError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    #[error("Merkle error: {0}")]
    Merkle(#[from] MerkleError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Proof verification failed: {0}")]
    ProofVerification(String),
}
