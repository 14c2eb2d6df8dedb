use airdrop_fixtures::MerkleRootRow;
use tracing::info;

use super::{build_tree, encode_leaves, generate_allowlist};
use crate::config::FixtureConfig;
use crate::error::CliResult;

/// Full pipeline: allowlist, ABI-encoded leaves, then the tree artifacts
pub fn execute(config: &FixtureConfig) -> CliResult<MerkleRootRow> {
    let allowlist = generate_allowlist::execute(config)?;
    encode_leaves::write_hashleaves(&allowlist, &config.output_dir)?;
    let summary = build_tree::build_fixtures(allowlist, &config.output_dir)?;

    info!(dir = %config.output_dir.display(), "Fixture generation complete");
    println!("Merkle root: {}", summary.root);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ALLOWLIST_FILE, HASHLEAVES_FILE, HASH_MERKLE_DATAS_FILE, MERKLE_DATAS_FILE,
        MERKLE_ROOT_FILE,
    };
    use airdrop_fixtures::{read_allowlist, read_merkle_datas_json, read_merkle_root_json};
    use airdrop_merkle::{verify_proof, U256};
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> FixtureConfig {
        FixtureConfig {
            target_size: 128,
            output_dir: dir.path().join("data"),
            seed: Some(7),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_writes_every_artifact() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let summary = execute(&config).unwrap();
        assert_eq!(summary.leaf_count, 128);
        assert_eq!(summary.height, 7);

        for file in [
            ALLOWLIST_FILE,
            HASHLEAVES_FILE,
            MERKLE_DATAS_FILE,
            MERKLE_ROOT_FILE,
            HASH_MERKLE_DATAS_FILE,
        ] {
            assert!(config.artifact_path(file).is_file(), "missing {}", file);
        }

        let allowlist = read_allowlist(config.artifact_path(ALLOWLIST_FILE)).unwrap();
        assert!(allowlist
            .iter()
            .all(|leaf| leaf.amount >= U256::from(1u64) && leaf.amount < U256::from(10u64)));

        let rows = read_merkle_datas_json(config.artifact_path(MERKLE_DATAS_FILE)).unwrap();
        assert_eq!(rows.len(), 128);
        for row in &rows {
            assert_eq!(row.proofs.len(), 7);
            assert!(verify_proof(&row.leaf().to_hash(), &row.proofs, &summary.root));
        }

        assert_eq!(
            read_merkle_root_json(config.artifact_path(MERKLE_ROOT_FILE)).unwrap(),
            summary
        );
    }

    #[test]
    fn test_same_seed_same_root() {
        let first_dir = TempDir::new().unwrap();
        let second_dir = TempDir::new().unwrap();

        let first = execute(&test_config(&first_dir)).unwrap();
        let second = execute(&test_config(&second_dir)).unwrap();
        assert_eq!(first.root, second.root);
    }
}
