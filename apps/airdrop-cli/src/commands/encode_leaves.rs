use airdrop_fixtures::{encode_allowlist, read_allowlist, write_hex_artifact};
use airdrop_merkle::AllowlistLeaf;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::HASHLEAVES_FILE;
use crate::error::CliResult;

/// ABI-encode an allowlist file into `hashleaves.json`
pub fn execute(allowlist: &Path, output_dir: &Path) -> CliResult<PathBuf> {
    let leaves = read_allowlist(allowlist)?;
    write_hashleaves(&leaves, output_dir)
}

pub fn write_hashleaves(leaves: &[AllowlistLeaf], output_dir: &Path) -> CliResult<PathBuf> {
    let encoded = encode_allowlist(leaves);
    let path = write_hex_artifact(output_dir, HASHLEAVES_FILE, &encoded)?;
    info!(path = %path.display(), entries = leaves.len(), "Wrote ABI-encoded allowlist");
    Ok(path)
}
