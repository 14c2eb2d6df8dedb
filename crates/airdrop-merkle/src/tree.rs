use alloy_primitives::B256;
use std::marker::PhantomData;
use tracing::debug;

use crate::error::{MerkleError, MerkleResult};
use crate::hasher::{Hasher, KeccakSortedHasher};
use crate::proof::MerkleProof;

/// Binary merkle tree built bottom-up from an ordered list of leaf digests.
///
/// `levels[0]` holds the leaf digests in input order and the last level holds
/// only the root. Adjacent nodes are paired (0 with 1, 2 with 3, ...); when a
/// level has an odd number of nodes the last one is promoted to the next level
/// unchanged.
///
/// The builder never sorts leaves, so moving a leaf into a different subtree
/// changes the root. Because pairs are hashed in sorted order, two exceptions
/// keep the root: swapping level-0 siblings (indices `2k` and `2k + 1`), and
/// mirror permutations such as reversing a power-of-two leaf list.
#[derive(Clone, Debug)]
pub struct MerkleTree<H: Hasher = KeccakSortedHasher> {
    levels: Vec<Vec<B256>>,
    _hasher: PhantomData<H>,
}

impl<H: Hasher> MerkleTree<H> {
    /// Build the tree. Fails with `EmptyInput` when `leaf_hashes` is empty.
    pub fn from_leaves(leaf_hashes: &[B256]) -> MerkleResult<Self> {
        if leaf_hashes.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let mut current_level = leaf_hashes.to_vec();
        let mut levels = vec![current_level.clone()];

        while current_level.len() > 1 {
            let next_level: Vec<B256> = current_level
                .chunks(2)
                .map(|pair| H::concat_and_hash(&pair[0], pair.get(1)))
                .collect();

            levels.push(next_level.clone());
            current_level = next_level;
        }

        debug!(
            leaves = leaf_hashes.len(),
            height = levels.len() - 1,
            "Built merkle tree"
        );

        Ok(Self {
            levels,
            _hasher: PhantomData,
        })
    }

    /// The root digest. For a single-leaf tree this is the leaf itself.
    pub fn root(&self) -> B256 {
        // from_leaves guarantees a non-empty top level
        self.levels[self.levels.len() - 1][0]
    }

    /// The root as a `0x`-prefixed lowercase hex string.
    pub fn root_hex(&self) -> String {
        format!("0x{}", hex::encode(self.root()))
    }

    pub fn levels(&self) -> &[Vec<B256>] {
        &self.levels
    }

    pub fn leaves(&self) -> &[B256] {
        &self.levels[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves (0 for a single leaf).
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// Inclusion proof for the leaf at `leaf_index`, sibling digests ordered
    /// from leaf to root.
    ///
    /// A level contributes no sibling when the walked node is the promoted odd
    /// node of that level, so proof length can differ between leaves.
    pub fn proof(&self, leaf_index: usize) -> MerkleResult<MerkleProof<H>> {
        if leaf_index >= self.leaf_count() {
            return Err(MerkleError::IndexOutOfRange {
                index: leaf_index,
                leaf_count: self.leaf_count(),
            });
        }

        Ok(self.sibling_path(leaf_index))
    }

    /// Proofs for every leaf, in leaf order.
    pub fn proofs(&self) -> Vec<MerkleProof<H>> {
        (0..self.leaf_count())
            .map(|index| self.sibling_path(index))
            .collect()
    }

    // leaf_index must be in range
    fn sibling_path(&self, leaf_index: usize) -> MerkleProof<H> {
        let mut proof_hashes = Vec::with_capacity(self.height());
        let mut index = leaf_index;

        for level in &self.levels[..self.levels.len() - 1] {
            if let Some(sibling) = level.get(index ^ 1) {
                proof_hashes.push(*sibling);
            }
            index /= 2;
        }

        MerkleProof::new(proof_hashes)
    }
}

/// Build a sorted-pair Keccak-256 tree from leaf digests.
pub fn build_tree(leaf_hashes: &[B256]) -> MerkleResult<MerkleTree> {
    MerkleTree::from_leaves(leaf_hashes)
}

/// Inclusion proof for `leaf_index` as a plain list of sibling digests.
pub fn get_proof<H: Hasher>(tree: &MerkleTree<H>, leaf_index: usize) -> MerkleResult<Vec<B256>> {
    tree.proof(leaf_index).map(|proof| proof.proof_hashes().to_vec())
}
