//! ABI-encoded fixture artifacts, for contract tests that load fixtures with
//! `abi.decode` instead of parsing JSON.

use airdrop_merkle::{AllowlistLeaf, B256};
use alloy_sol_types::{sol, SolValue};

use crate::schemas::MerkleDataRow;

sol! {
    /// `tuple(address account, uint256 amount)`
    #[derive(Debug, PartialEq, Eq)]
    struct AllowlistEntry {
        address account;
        uint256 amount;
    }

    /// `tuple(address account, uint256 amount, bytes32[] proofs)`
    #[derive(Debug, PartialEq, Eq)]
    struct MerkleDataEntry {
        address account;
        uint256 amount;
        bytes32[] proofs;
    }
}

/// `abi.encode(tuple(address,uint256)[])` as a `0x`-prefixed hex string.
///
/// **File**: `hashleaves.json`
pub fn encode_allowlist(leaves: &[AllowlistLeaf]) -> String {
    let entries: Vec<AllowlistEntry> = leaves
        .iter()
        .map(|leaf| AllowlistEntry {
            account: leaf.address,
            amount: leaf.amount,
        })
        .collect();

    format!("0x{}", hex::encode(entries.abi_encode()))
}

/// `abi.encode(bytes32 root, tuple(address,uint256,bytes32[])[])` as a
/// `0x`-prefixed hex string.
///
/// **File**: `hashMerkleDatas.json`
pub fn encode_merkle_datas(root: B256, rows: &[MerkleDataRow]) -> String {
    let entries: Vec<MerkleDataEntry> = rows
        .iter()
        .map(|row| MerkleDataEntry {
            account: row.address,
            amount: row.amount,
            proofs: row.proofs.clone(),
        })
        .collect();

    format!("0x{}", hex::encode((root, entries).abi_encode_params()))
}
