use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

pub const ALLOWLIST_FILE: &str = "allowlist.json";
pub const ALLOWLIST_CSV_FILE: &str = "allowlist.csv";
pub const HASHLEAVES_FILE: &str = "hashleaves.json";
pub const MERKLE_DATAS_FILE: &str = "merkleDatas.json";
pub const MERKLE_ROOT_FILE: &str = "merkleRoot.json";
pub const HASH_MERKLE_DATAS_FILE: &str = "hashMerkleDatas.json";

/// Fixture generation configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Static allowlist to start from (JSON or CSV)
    #[serde(default)]
    pub allowlist_path: Option<PathBuf>,

    /// Number of entries the allowlist is topped up to
    #[serde(default = "default_target_size")]
    pub target_size: usize,

    /// Directory all artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Draw random amounts for generated entries (otherwise they get 0)
    #[serde(default = "default_assign_amounts")]
    pub assign_amounts: bool,

    /// Exclusive upper bound of generated amounts
    #[serde(default = "default_max_amount")]
    pub max_amount: u64,

    /// Seed for deterministic generation; OS entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Also write the allowlist as CSV
    #[serde(default)]
    pub write_csv: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            allowlist_path: None,
            target_size: default_target_size(),
            output_dir: default_output_dir(),
            assign_amounts: default_assign_amounts(),
            max_amount: default_max_amount(),
            seed: None,
            write_csv: false,
        }
    }
}

impl FixtureConfig {
    /// Load a YAML config file, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config = match path {
            Some(path) => serde_yaml::from_str(&fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        Ok(config)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.target_size == 0 {
            return Err(CliError::InvalidConfig(
                "target_size must be at least 1".to_string(),
            ));
        }
        if self.assign_amounts && self.max_amount < 2 {
            return Err(CliError::InvalidConfig(format!(
                "max_amount must be at least 2 when assigning amounts, got {}",
                self.max_amount
            )));
        }
        Ok(())
    }

    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Command-line overrides for `FixtureConfig` values
#[derive(Debug, Clone, Default, Args)]
pub struct FixtureOverrides {
    /// Static allowlist to top up (JSON or CSV)
    #[arg(short, long)]
    pub base: Option<PathBuf>,

    /// Number of entries to top the allowlist up to
    #[arg(short, long)]
    pub target_size: Option<usize>,

    /// Seed for deterministic generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Exclusive upper bound of generated amounts
    #[arg(long)]
    pub max_amount: Option<u64>,

    /// Give generated entries an amount of 0
    #[arg(long)]
    pub zero_amounts: bool,

    /// Output directory for generated files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write the allowlist as CSV
    #[arg(long)]
    pub csv: bool,
}

impl FixtureOverrides {
    pub fn apply(&self, mut config: FixtureConfig) -> FixtureConfig {
        if let Some(base) = &self.base {
            config.allowlist_path = Some(base.clone());
        }
        if let Some(target_size) = self.target_size {
            config.target_size = target_size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_amount) = self.max_amount {
            config.max_amount = max_amount;
        }
        if self.zero_amounts {
            config.assign_amounts = false;
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if self.csv {
            config.write_csv = true;
        }
        config
    }
}

fn default_target_size() -> usize {
    128
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_assign_amounts() -> bool {
    true
}

fn default_max_amount() -> u64 {
    10
}
