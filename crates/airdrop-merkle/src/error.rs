use alloy_primitives::Address;
use thiserror::Error;

pub type MerkleResult<T> = Result<T, MerkleError>;

/// Validation failures of the leaf codec and tree operations.
///
/// None of these are transient: each one is a defect in the input data or a
/// misuse of the API and is surfaced to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    #[error("Cannot build a merkle tree from an empty leaf set")]
    EmptyInput,

    #[error("Leaf index {index} out of range (leaf count: {leaf_count})")]
    IndexOutOfRange { index: usize, leaf_count: usize },

    #[error("Duplicate address in allowlist: {0}")]
    DuplicateAddress(Address),

    #[error("Address not found in allowlist: {0}")]
    AddressNotFound(Address),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),
}
