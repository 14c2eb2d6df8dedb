use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod logging;

use config::{FixtureConfig, FixtureOverrides};
use error::CliResult;

#[derive(Parser)]
#[command(name = "airdrop-fixtures")]
#[command(about = "Airdrop fixtures - Keccak-256 merkle trees, proofs and ABI artifacts")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML configuration file for fixture generation
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Top up a static allowlist with random unique entries
    GenerateAllowlist {
        #[command(flatten)]
        overrides: FixtureOverrides,
    },

    /// ABI-encode an allowlist into hashleaves.json
    EncodeLeaves {
        /// Allowlist file (JSON or CSV)
        allowlist: PathBuf,

        /// Output directory for generated files
        #[arg(short, long, default_value = "data")]
        output_dir: PathBuf,
    },

    /// Build the merkle tree and write proofs, root and ABI artifacts
    BuildTree {
        /// Allowlist file (JSON or CSV)
        allowlist: PathBuf,

        /// Output directory for generated files
        #[arg(short, long, default_value = "data")]
        output_dir: PathBuf,
    },

    /// Verify every proof in a merkleDatas.json file
    VerifyProofs {
        /// Merkle data file
        merkle_datas: PathBuf,

        /// Expected root (hex string); recomputed from the file when omitted
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Run the whole pipeline: allowlist, leaves, tree
    Generate {
        #[command(flatten)]
        overrides: FixtureOverrides,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::GenerateAllowlist { overrides } => {
            let config = overrides.apply(FixtureConfig::load(cli.config.as_deref())?);
            commands::generate_allowlist::execute(&config).map(|_| ())
        }

        Commands::EncodeLeaves {
            allowlist,
            output_dir,
        } => commands::encode_leaves::execute(&allowlist, &output_dir).map(|_| ()),

        Commands::BuildTree {
            allowlist,
            output_dir,
        } => commands::build_tree::execute(&allowlist, &output_dir).map(|_| ()),

        Commands::VerifyProofs { merkle_datas, root } => {
            commands::verify_proofs::execute(&merkle_datas, root.as_deref()).map(|_| ())
        }

        Commands::Generate { overrides } => {
            let config = overrides.apply(FixtureConfig::load(cli.config.as_deref())?);
            commands::generate::execute(&config).map(|_| ())
        }
    }
}
