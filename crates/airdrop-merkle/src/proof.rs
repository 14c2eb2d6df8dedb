use alloy_primitives::B256;
use std::marker::PhantomData;

use crate::error::MerkleResult;
use crate::hasher::{Hasher, KeccakSortedHasher};
use crate::leaf::parse_digest;

/// Ordered sibling digests from a leaf up to (but excluding) the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof<H: Hasher = KeccakSortedHasher> {
    proof_hashes: Vec<B256>,
    _hasher: PhantomData<H>,
}

impl<H: Hasher> MerkleProof<H> {
    pub fn new(proof_hashes: Vec<B256>) -> Self {
        Self {
            proof_hashes,
            _hasher: PhantomData,
        }
    }

    /// Parse a proof from `0x`-prefixed hex strings, as stored in fixture files.
    pub fn from_hex_strings<S: AsRef<str>>(hashes: &[S]) -> MerkleResult<Self> {
        let proof_hashes = hashes
            .iter()
            .map(|hash| parse_digest(hash.as_ref()))
            .collect::<MerkleResult<Vec<_>>>()?;
        Ok(Self::new(proof_hashes))
    }

    pub fn proof_hashes(&self) -> &[B256] {
        &self.proof_hashes
    }

    pub fn len(&self) -> usize {
        self.proof_hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proof_hashes.is_empty()
    }

    /// Fold the proof over `leaf_hash` and return the resulting root.
    pub fn root(&self, leaf_hash: &B256) -> B256 {
        self.proof_hashes
            .iter()
            .fold(*leaf_hash, |current, sibling| {
                H::concat_and_hash(&current, Some(sibling))
            })
    }

    pub fn verify(&self, root: &B256, leaf_hash: &B256) -> bool {
        self.root(leaf_hash) == *root
    }

    /// `0x`-prefixed lowercase hex of each sibling digest.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.proof_hashes
            .iter()
            .map(|hash| format!("0x{}", hex::encode(hash)))
            .collect()
    }
}

/// Verify a sorted-pair Keccak-256 inclusion proof.
///
/// This is the same fold the on-chain verifier performs:
///
/// ```text
/// computed = leaf
/// for sibling in proof: computed = keccak256(sorted(computed, sibling))
/// return computed == root
/// ```
pub fn verify_proof(leaf_hash: &B256, proof: &[B256], root: &B256) -> bool {
    extract_root_from_proof(leaf_hash, proof) == *root
}

/// Recompute the root implied by a leaf and its proof (useful for testing).
pub fn extract_root_from_proof(leaf_hash: &B256, proof: &[B256]) -> B256 {
    MerkleProof::<KeccakSortedHasher>::new(proof.to_vec()).root(leaf_hash)
}

/// Batch verify multiple (leaf, proof) pairs against the same root
pub fn batch_verify_proofs(proofs: &[(B256, &[B256])], root: &B256) -> Vec<bool> {
    proofs
        .iter()
        .map(|(leaf_hash, proof)| verify_proof(leaf_hash, proof, root))
        .collect()
}
