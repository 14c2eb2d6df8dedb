use airdrop_fixtures::read_merkle_datas_json;
use airdrop_merkle::{parse_digest, verify_proof, AllowlistTree, B256};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{CliError, CliResult};

/// Check every proof in a `merkleDatas.json` file.
///
/// With no explicit root the tree is rebuilt from the file's own entries,
/// which only confirms the proofs are internally consistent.
pub fn execute(merkle_datas: &Path, root: Option<&str>) -> CliResult<B256> {
    let rows = read_merkle_datas_json(merkle_datas)?;

    let root = match root {
        Some(root) => parse_digest(root)?,
        None => {
            let tree = AllowlistTree::from_leaves(rows.iter().map(|row| row.leaf()).collect())?;
            info!(root = %tree.tree().root_hex(), "Recomputed root from merkle data");
            tree.root()
        }
    };

    let mut failed = 0;
    for (index, row) in rows.iter().enumerate() {
        if !verify_proof(&row.leaf().to_hash(), &row.proofs, &root) {
            warn!(
                entry = index + 1,
                address = %row.address.to_checksum(None),
                "Proof does not verify"
            );
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(CliError::ProofVerification(format!(
            "{} of {} proofs failed against {}",
            failed,
            rows.len(),
            root
        )));
    }

    println!("All {} proofs verify against {}", rows.len(), root);
    Ok(root)
}
