use alloy_primitives::{keccak256, B256};

/// Hashing rule shared by the tree builder and the proof verifier.
///
/// Both sides must go through the same `concat_and_hash`, otherwise every
/// proof fails to reproduce the root.
pub trait Hasher: Clone {
    /// Hash raw leaf data (the packed leaf preimage).
    fn hash(data: &[u8]) -> B256;

    /// Combine a node with its sibling. `None` means the node has no sibling
    /// at this level and is carried up unchanged.
    fn concat_and_hash(left: &B256, right: Option<&B256>) -> B256;
}

/// Keccak-256 hasher with sorted-pair internal nodes.
///
/// ## Hashing Scheme
///
/// - **Leaf nodes**: `keccak256(leaf_data)` with no prefix, so that leaves
///   match `keccak256(abi.encodePacked(address, uint256))` computed on-chain
/// - **Internal nodes**: `keccak256(min(a, b) || max(a, b))`, ordered by byte
///   value so that verification never needs to know which side a sibling is on
/// - **Unpaired nodes**: promoted as-is, no duplication and no padding hash
///
/// This is the rule implemented by OpenZeppelin's `MerkleProof.verify` and by
/// `merkletreejs` with `sortPairs` enabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeccakSortedHasher;

impl KeccakSortedHasher {
    /// Concatenate two digests in ascending byte order.
    pub fn sorted_concat(a: &B256, b: &B256) -> [u8; 64] {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(first.as_slice());
        out[32..].copy_from_slice(second.as_slice());
        out
    }

    /// Parent digest of two siblings.
    pub fn hash_pair(a: &B256, b: &B256) -> B256 {
        keccak256(Self::sorted_concat(a, b))
    }
}

impl Hasher for KeccakSortedHasher {
    fn hash(data: &[u8]) -> B256 {
        keccak256(data)
    }

    fn concat_and_hash(left: &B256, right: Option<&B256>) -> B256 {
        match right {
            Some(right) => Self::hash_pair(left, right),
            None => *left,
        }
    }
}
