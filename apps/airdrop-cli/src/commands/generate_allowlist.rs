use airdrop_fixtures::{
    ensure_output_dir, read_allowlist, top_up_allowlist, write_allowlist_csv,
    write_allowlist_json, RandomLeafGenerator,
};
use airdrop_merkle::AllowlistLeaf;
use tracing::{info, warn};

use crate::config::{FixtureConfig, ALLOWLIST_CSV_FILE, ALLOWLIST_FILE};
use crate::error::CliResult;

/// Top up the configured base allowlist to the target size and write it out
pub fn execute(config: &FixtureConfig) -> CliResult<Vec<AllowlistLeaf>> {
    config.validate()?;

    let base = match &config.allowlist_path {
        Some(path) => {
            let base = read_allowlist(path)?;
            info!(path = %path.display(), entries = base.len(), "Loaded base allowlist");
            base
        }
        None => Vec::new(),
    };

    if base.len() > config.target_size {
        warn!(
            entries = base.len(),
            target_size = config.target_size,
            "Base allowlist is larger than the target size, keeping every entry"
        );
    }

    let mut generator = match config.seed {
        Some(seed) => {
            info!(seed, "Generating allowlist entries deterministically");
            RandomLeafGenerator::from_seed(seed, config.max_amount, config.assign_amounts)?
        }
        None => RandomLeafGenerator::from_entropy(config.max_amount, config.assign_amounts)?,
    };

    let allowlist = top_up_allowlist(base, &mut generator, config.target_size)?;

    ensure_output_dir(&config.output_dir)?;
    let json_path = config.artifact_path(ALLOWLIST_FILE);
    write_allowlist_json(&json_path, &allowlist)?;
    info!(path = %json_path.display(), entries = allowlist.len(), "Wrote allowlist");

    if config.write_csv {
        let csv_path = config.artifact_path(ALLOWLIST_CSV_FILE);
        write_allowlist_csv(&csv_path, &allowlist)?;
        info!(path = %csv_path.display(), "Wrote allowlist CSV");
    }

    Ok(allowlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdrop_merkle::{Address, U256};
    use tempfile::TempDir;

    #[test]
    fn test_generate_from_base_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let base_path = dir.path().join("base.json");
        let base = vec![AllowlistLeaf::new(Address::repeat_byte(0x42), U256::from(3u64))];
        write_allowlist_json(&base_path, &base).unwrap();

        let config = FixtureConfig {
            allowlist_path: Some(base_path),
            target_size: 16,
            output_dir: dir.path().join("data"),
            seed: Some(42),
            write_csv: true,
            ..Default::default()
        };

        let first = execute(&config).unwrap();
        let second = execute(&config).unwrap();

        assert_eq!(first.len(), 16);
        assert_eq!(first[0], base[0]);
        assert_eq!(first, second, "Same seed, same allowlist");

        assert_eq!(read_allowlist(config.artifact_path(ALLOWLIST_FILE)).unwrap(), first);
        assert_eq!(
            read_allowlist(config.artifact_path(ALLOWLIST_CSV_FILE)).unwrap(),
            first
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = TempDir::new().unwrap();
        let config = FixtureConfig {
            target_size: 0,
            output_dir: dir.path().join("data"),
            ..Default::default()
        };
        assert!(execute(&config).is_err());
    }
}
