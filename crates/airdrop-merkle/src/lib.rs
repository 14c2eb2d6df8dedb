/*!
# Airdrop Merkle

Deterministic merkle trees over airdrop allowlist leaves, compatible with
on-chain verification via `keccak256(abi.encodePacked(address, uint256))`
leaves and sorted-pair internal nodes (the OpenZeppelin `MerkleProof` rule).

## Hashing Scheme

- **Leaf**: `keccak256(address[20] || amount_be[32])`
- **Internal node**: `keccak256(min(a, b) || max(a, b))`
- **Odd node**: the last node of an odd-sized level is promoted unchanged

## Usage

```rust
use airdrop_merkle::{build_tree, encode_leaf, verify_proof, MerkleResult};

fn example() -> MerkleResult<()> {
    let leaves = vec![
        encode_leaf("0x1111111111111111111111111111111111111111", "5")?,
        encode_leaf("0x2222222222222222222222222222222222222222", "7")?,
        encode_leaf("0x3333333333333333333333333333333333333333", "9")?,
    ];

    let tree = build_tree(&leaves)?;
    let proof = tree.proof(2)?;

    assert!(verify_proof(&leaves[2], proof.proof_hashes(), &tree.root()));
    Ok(())
}
```
*/

pub mod allowlist;
pub mod error;
pub mod hasher;
pub mod leaf;
pub mod proof;
pub mod tree;

pub use allowlist::AllowlistTree;
pub use error::{MerkleError, MerkleResult};
pub use hasher::{Hasher, KeccakSortedHasher};
pub use leaf::{
    encode_leaf, hash_leaf, parse_address, parse_amount, parse_digest, AllowlistLeaf,
    PACKED_LEAF_LEN,
};
pub use proof::{batch_verify_proofs, extract_root_from_proof, verify_proof, MerkleProof};
pub use tree::{build_tree, get_proof, MerkleTree};

// Re-export the EVM primitive types used throughout the public API
pub use alloy_primitives::{Address, B256, U256};
