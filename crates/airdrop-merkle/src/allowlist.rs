use alloy_primitives::{Address, B256};
use std::collections::HashMap;

use crate::error::{MerkleError, MerkleResult};
use crate::leaf::AllowlistLeaf;
use crate::proof::{verify_proof, MerkleProof};
use crate::tree::MerkleTree;

/// Result of building a merkle tree from allowlist leaves
#[derive(Clone, Debug)]
pub struct AllowlistTree {
    /// The underlying merkle tree
    tree: MerkleTree,
    /// Mapping from address to its leaf index in the tree
    address_to_index: HashMap<Address, usize>,
    /// Leaves the tree was built from, in tree order
    leaves: Vec<AllowlistLeaf>,
}

impl AllowlistTree {
    /// Build a merkle tree from a list of allowlist leaves.
    ///
    /// Each address may appear only once so that lookups by address are
    /// unambiguous.
    pub fn from_leaves(leaves: Vec<AllowlistLeaf>) -> MerkleResult<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let mut address_to_index = HashMap::with_capacity(leaves.len());
        for (index, leaf) in leaves.iter().enumerate() {
            if address_to_index.insert(leaf.address, index).is_some() {
                return Err(MerkleError::DuplicateAddress(leaf.address));
            }
        }

        let leaf_hashes: Vec<B256> = leaves.iter().map(AllowlistLeaf::to_hash).collect();
        let tree = MerkleTree::from_leaves(&leaf_hashes)?;

        Ok(Self {
            tree,
            address_to_index,
            leaves,
        })
    }

    pub fn root(&self) -> B256 {
        self.tree.root()
    }

    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    pub fn leaves(&self) -> &[AllowlistLeaf] {
        &self.leaves
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn index_of(&self, address: &Address) -> MerkleResult<usize> {
        self.address_to_index
            .get(address)
            .copied()
            .ok_or(MerkleError::AddressNotFound(*address))
    }

    /// Generate a merkle proof for a specific address
    pub fn proof_for_address(&self, address: &Address) -> MerkleResult<MerkleProof> {
        self.tree.proof(self.index_of(address)?)
    }

    pub fn proof_for_index(&self, index: usize) -> MerkleResult<MerkleProof> {
        self.tree.proof(index)
    }

    /// Get the leaf data for a specific address
    pub fn leaf_for_address(&self, address: &Address) -> MerkleResult<&AllowlistLeaf> {
        let index = self.index_of(address)?;
        self.leaves.get(index).ok_or(MerkleError::IndexOutOfRange {
            index,
            leaf_count: self.leaves.len(),
        })
    }

    /// Verify a proof for a given address against this tree's root
    pub fn verify_proof(&self, address: &Address, proof: &[B256]) -> MerkleResult<bool> {
        let leaf = self.leaf_for_address(address)?;
        Ok(verify_proof(&leaf.to_hash(), proof, &self.root()))
    }

    /// Every leaf paired with its proof, in leaf order.
    pub fn entries(&self) -> MerkleResult<Vec<(AllowlistLeaf, MerkleProof)>> {
        self.leaves
            .iter()
            .enumerate()
            .map(|(index, leaf)| Ok((*leaf, self.tree.proof(index)?)))
            .collect()
    }
}
