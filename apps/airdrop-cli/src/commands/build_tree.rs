use airdrop_fixtures::{
    encode_merkle_datas, ensure_output_dir, read_allowlist, write_hex_artifact,
    write_merkle_datas_json, write_merkle_root_json, MerkleDataRow, MerkleRootRow,
};
use airdrop_merkle::{AllowlistLeaf, AllowlistTree};
use std::path::Path;
use tracing::{debug, info};

use crate::config::{HASH_MERKLE_DATAS_FILE, MERKLE_DATAS_FILE, MERKLE_ROOT_FILE};
use crate::error::{CliError, CliResult};

/// Build the merkle tree for an allowlist file and write its artifacts
pub fn execute(allowlist: &Path, output_dir: &Path) -> CliResult<MerkleRootRow> {
    let leaves = read_allowlist(allowlist)?;
    let summary = build_fixtures(leaves, output_dir)?;

    println!("Merkle root: {}", summary.root);
    Ok(summary)
}

/// Build the tree, check every proof against the root, then write
/// `merkleDatas.json`, `merkleRoot.json` and `hashMerkleDatas.json`.
pub fn build_fixtures(leaves: Vec<AllowlistLeaf>, output_dir: &Path) -> CliResult<MerkleRootRow> {
    let tree = AllowlistTree::from_leaves(leaves)?;
    let root = tree.root();

    let mut rows = Vec::with_capacity(tree.len());
    for (index, (leaf, proof)) in tree.entries()?.into_iter().enumerate() {
        if !proof.verify(&root, &leaf.to_hash()) {
            return Err(CliError::ProofVerification(format!(
                "generated proof for entry {} ({}) does not reproduce the root",
                index + 1,
                leaf.address.to_checksum(None)
            )));
        }
        rows.push(MerkleDataRow::from_entry(&leaf, &proof));
    }
    debug!(proofs = rows.len(), "Self-verified all proofs");

    let summary = MerkleRootRow {
        root,
        leaf_count: tree.len(),
        height: tree.tree().height(),
    };

    let output_dir = ensure_output_dir(output_dir)?;
    write_merkle_datas_json(output_dir.join(MERKLE_DATAS_FILE), &rows)?;
    write_merkle_root_json(output_dir.join(MERKLE_ROOT_FILE), &summary)?;
    write_hex_artifact(
        &output_dir,
        HASH_MERKLE_DATAS_FILE,
        &encode_merkle_datas(root, &rows),
    )?;

    info!(
        root = %tree.tree().root_hex(),
        leaves = summary.leaf_count,
        height = summary.height,
        dir = %output_dir.display(),
        "Wrote merkle fixtures"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdrop_fixtures::{read_merkle_datas_json, read_merkle_root_json, write_allowlist_json};
    use airdrop_merkle::{verify_proof, Address, U256};
    use tempfile::TempDir;

    fn create_test_leaves(count: u8) -> Vec<AllowlistLeaf> {
        (1..=count)
            .map(|i| AllowlistLeaf::new(Address::repeat_byte(i), U256::from(i as u64)))
            .collect()
    }

    #[test]
    fn test_build_tree_artifacts() {
        let dir = TempDir::new().unwrap();
        let allowlist = dir.path().join("allowlist.json");
        let output_dir = dir.path().join("data");
        let leaves = create_test_leaves(5);
        write_allowlist_json(&allowlist, &leaves).unwrap();

        let summary = execute(&allowlist, &output_dir).unwrap();
        assert_eq!(summary.leaf_count, 5);
        assert_eq!(summary.height, 3);

        let rows = read_merkle_datas_json(output_dir.join(MERKLE_DATAS_FILE)).unwrap();
        assert_eq!(rows.len(), 5);
        for (row, leaf) in rows.iter().zip(leaves.iter()) {
            assert_eq!(row.leaf(), *leaf, "Rows keep allowlist order");
            assert!(verify_proof(&leaf.to_hash(), &row.proofs, &summary.root));
        }

        assert_eq!(
            read_merkle_root_json(output_dir.join(MERKLE_ROOT_FILE)).unwrap(),
            summary
        );
        assert!(output_dir.join(HASH_MERKLE_DATAS_FILE).is_file());
    }

    #[test]
    fn test_single_entry_allowlist() {
        let dir = TempDir::new().unwrap();
        let leaves = create_test_leaves(1);
        let expected_root = leaves[0].to_hash();

        let summary = build_fixtures(leaves, dir.path()).unwrap();
        assert_eq!(summary.root, expected_root);
        assert_eq!(summary.height, 0);

        let rows = read_merkle_datas_json(dir.path().join(MERKLE_DATAS_FILE)).unwrap();
        assert!(rows[0].proofs.is_empty());
    }
}
